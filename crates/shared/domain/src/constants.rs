//! Names shared between the registry, the sheet backend and the shell.

/// Document holding the local partner code list.
pub const PARTNER_CODES_FILE: &str = "rm_partner_codes.json";

/// Document holding the sheet backend rows, header row first.
pub const SHEET_FILE: &str = "sheet.json";

/// Leading marker of every partner code.
pub const CODE_MARKER: char = 'P';

/// Random characters following [`CODE_MARKER`].
pub const CODE_RANDOM_LEN: usize = 7;

/// Wire names of the sheet columns, in column order.
pub const SHEET_COLUMNS: [&str; 8] =
    ["timestamp", "name", "phone", "email", "depositAt", "depositorName", "partnerRef", "code"];

/// Display header written as the first sheet row.
pub const SHEET_HEADER: [&str; 8] =
    ["타임스탬프", "이름", "연락처", "이메일", "입금일시", "입금자명", "파트너스 코드", "고유코드"];

/// Sheet timestamp layout (`yyyy-MM-dd HH:mm:ss`).
pub const SHEET_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const SHEET_TAG: &str = "Sheet";
pub const SYSTEM_TAG: &str = "System";
