use gobblet::{format_matches, MatchRecord};

#[test]
fn test_no_matches_is_empty() {
    assert_eq!(format_matches(&[]), "");
}

#[test]
fn test_numbering_keeps_input_order() {
    let matches = [
        MatchRecord::new("2024-02-01", "ada", "bo"),
        MatchRecord::new("2023-01-01", "cy", "dee"),
    ];
    let text = format_matches(&matches);
    assert_eq!(
        text,
        "1 : 2024-02-01, ada vs bo\n2 : 2023-01-01, cy vs dee\n"
    );
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_duplicates_are_kept() {
    let record = MatchRecord::new("2024-03-05 10:12", "ada", "bo");
    let text = format_matches(&[record.clone(), record]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "1 : 2024-03-05 10:12, ada vs bo");
    assert_eq!(lines[1], "2 : 2024-03-05 10:12, ada vs bo");
}

#[test]
fn test_numbers_past_nine() {
    let matches: Vec<MatchRecord> = (0..12)
        .map(|i| MatchRecord::new(format!("day {}", i), "a", "b"))
        .collect();
    let text = format_matches(&matches);
    assert_eq!(text.lines().last().unwrap(), "12 : day 11, a vs b");
}
