use rhub_partners::code::is_well_formed;
use rhub_partners::{generate_code, generate_unique_code};
use std::collections::HashSet;

#[test]
fn a_thousand_codes_do_not_collide() {
    let codes: HashSet<String> = (0..1_000).map(|_| generate_code()).collect();
    assert_eq!(codes.len(), 1_000);
    assert!(codes.iter().all(|code| is_well_formed(code)));
}

#[test]
fn unique_code_avoids_existing() {
    let existing: Vec<String> = (0..1_000).map(|_| generate_code()).collect();
    let code = generate_unique_code(existing.iter().map(String::as_str)).unwrap();
    assert!(!existing.contains(&code));
    assert!(is_well_formed(&code));
}
