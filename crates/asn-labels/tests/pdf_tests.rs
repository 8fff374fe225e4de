use asn_labels::*;
use lopdf::Document;

fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).unwrap().get_pages().len()
}

#[test]
fn test_pdf_has_one_page_per_sheet() {
    let options = LabelOptions::default();

    let params = ValidatedParams::new(1, 4, 2, 2).unwrap();
    let (bytes, report) = generate_pdf_bytes(&params, &options).unwrap();
    assert_eq!(page_count(&bytes), 1);
    assert_eq!(report.pages, 1);
    assert!(report.is_complete());

    let params = ValidatedParams::new(1, 5, 2, 2).unwrap();
    let (bytes, report) = generate_pdf_bytes(&params, &options).unwrap();
    assert_eq!(page_count(&bytes), 2);
    assert_eq!(report.labels_drawn, 5);
}

#[test]
fn test_pdf_pages_are_a4() {
    let params = ValidatedParams::new(1, 3, 3, 8).unwrap();
    let (bytes, _) = generate_pdf_bytes(&params, &LabelOptions::default()).unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    for (_, page_id) in doc.get_pages() {
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let width = media_box[2].as_float().unwrap();
        let height = media_box[3].as_float().unwrap();
        assert!((width - 595.28).abs() < 0.5, "width {width}");
        assert!((height - 841.89).abs() < 0.5, "height {height}");
    }
}

#[test]
fn test_invalid_options_rejected_before_rendering() {
    let params = ValidatedParams::new(1, 3, 3, 8).unwrap();
    let options = LabelOptions {
        font_size_pt: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        generate_pdf_bytes(&params, &options),
        Err(LabelError::Config(_))
    ));
}

#[test]
fn test_unencodable_prefix_is_reported_not_fatal() {
    let params = ValidatedParams::new(1, 3, 3, 8).unwrap();
    let options = LabelOptions {
        prefix: "ÄSN".to_string(),
        ..Default::default()
    };

    let (bytes, report) = generate_pdf_bytes(&params, &options).unwrap();
    assert_eq!(report.labels_drawn, 3);
    assert_eq!(report.failures.len(), 3);
    assert_eq!(report.failures[0].text, "ÄSN000001");
    assert_eq!(page_count(&bytes), 1);
}

#[tokio::test]
async fn test_generate_pdf_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let params = ValidatedParams::new(10, 30, 3, 4).unwrap();
    let path = dir.path().join(params.output_filename());

    let report = generate_pdf(&params, &LabelOptions::default(), &path)
        .await
        .unwrap();

    assert_eq!(report.labels_drawn, 21);
    assert_eq!(report.pages, 2);

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&bytes), 2);

    // No scratch file left behind
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[tokio::test]
async fn test_save_pdf_failure_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("labels.pdf");

    let result = save_pdf(b"%PDF-1.7".to_vec(), &path).await;

    assert!(matches!(result, Err(LabelError::Io(_))));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
