use asn_labels::*;

#[test]
fn test_stats_partial_last_sheet() {
    let params = ValidatedParams::new(1, 5, 2, 2).unwrap();
    let stats = calculate_statistics(&params);

    assert_eq!(stats.total_labels, 5);
    assert_eq!(stats.labels_per_sheet, 4);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.last_sheet_labels, 1);
    assert_eq!(stats.unused_cells(), 3);
}

#[test]
fn test_stats_exact_fill() {
    let params = ValidatedParams::new(1, 4, 2, 2).unwrap();
    let stats = calculate_statistics(&params);

    assert_eq!(stats.sheets, 1);
    assert_eq!(stats.last_sheet_labels, 4);
    assert_eq!(stats.unused_cells(), 0);
}

#[test]
fn test_stats_single_label() {
    let params = ValidatedParams::new(42, 42, 3, 8).unwrap();
    let stats = calculate_statistics(&params);

    assert_eq!(stats.total_labels, 1);
    assert_eq!(stats.sheets, 1);
    assert_eq!(stats.last_sheet_labels, 1);
}

#[test]
fn test_stats_large_run() {
    // 1000 labels on 65-up sheets
    let params = ValidatedParams::new(1, 1000, 5, 13).unwrap();
    let stats = calculate_statistics(&params);

    assert_eq!(stats.labels_per_sheet, 65);
    assert_eq!(stats.sheets, 16);
    assert_eq!(stats.last_sheet_labels, 1000 - 15 * 65);
}
