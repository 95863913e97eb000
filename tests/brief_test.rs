use investor_brief::{build_document, generate_brief, BriefOptions, Project};
use pretty_assertions::assert_eq;

fn project(slug: &str, category: &str, long_description: String) -> Project {
    Project {
        slug: slug.to_string(),
        title: "Quinta Verde".to_string(),
        category: category.to_string(),
        location: Some("Alentejo, Portugal".to_string()),
        status: "Series A".to_string(),
        short_description: "Regenerative orchards with on-site processing.".to_string(),
        long_description,
    }
}

fn undated() -> BriefOptions {
    BriefOptions {
        creation_date: false,
        ..BriefOptions::default()
    }
}

fn long_text(words: usize) -> String {
    (0..words)
        .map(|i| format!("orchard{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_pdf_parses_with_every_page() {
    let project = project("quinta-verde", "AgroTech", long_text(1500));
    let options = undated();

    let document = build_document(&project, &options);
    assert!(document.page_count() > 1);

    let bytes = generate_brief(&project, &options).unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(parsed.get_pages().len(), document.page_count());
}

#[test]
fn test_uncompressed_output_parses() {
    let project = project("quinta-verde", "Food", "Short overview.".to_string());
    let options = BriefOptions {
        compress: false,
        ..undated()
    };
    let bytes = generate_brief(&project, &options).unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    assert!(!parsed.get_pages().is_empty());
}

#[test]
fn test_footers_show_true_total() {
    let project = project("quinta-verde", "AgroTech", long_text(1500));
    let document = build_document(&project, &undated());
    let total = document.page_count();

    for (index, page) in document.pages.iter().enumerate() {
        let footer = page.text_runs().last().unwrap();
        assert_eq!(footer.text, format!("Page {} of {}", index + 1, total));
    }
}

#[test]
fn test_category_examples() {
    let cases = [
        ("AgroTech", "Real demand from agricultural operations"),
        ("Consumer Health", "Data infrastructure for precision medicine"),
        ("Logistics", "Portfolio structure with shared infrastructure"),
    ];
    for (category, expected) in cases {
        let document = build_document(&project("p", category, String::new()), &undated());
        let text = document.text_content().join("\n");
        assert!(
            text.contains(expected),
            "{} should include {:?}",
            category,
            expected
        );
    }
}

#[test]
fn test_same_project_draws_same_text() {
    let project = project("longevity-clinic", "Health", long_text(400));
    let first = build_document(&project, &BriefOptions::default());
    let second = build_document(&project, &BriefOptions::default());
    assert_eq!(first.text_content(), second.text_content());

    let a = generate_brief(&project, &undated()).unwrap();
    let b = generate_brief(&project, &undated()).unwrap();
    assert_eq!(a, b);
}
