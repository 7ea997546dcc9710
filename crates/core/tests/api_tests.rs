//! Library API integration tests
use sitelift_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_landing_contacts() {
    let contacts = contacts_from_html(&read_fixture("landing.html"));

    assert_eq!(contacts.instagram.as_deref(), Some("https://www.instagram.com/acmestudio/"));
    assert_eq!(contacts.whatsapp.as_deref(), Some("https://wa.me/15551234567"));
    assert_eq!(contacts.email.as_deref(), Some("hello@acme.test"));
    assert_eq!(contacts.x.as_deref(), Some("https://twitter.com/acmestudio"));
}

#[test]
fn test_landing_outline_metadata() {
    let outline = outline_from_html(&read_fixture("landing.html"), "https://acme.test");

    assert_eq!(outline.source, "https://acme.test");
    assert_eq!(outline.title.as_deref(), Some("Acme Studio | Websites for small teams"));
    assert_eq!(
        outline.description.as_deref(),
        Some("Acme Studio designs and builds websites for independent businesses.")
    );
}

#[test]
fn test_landing_highlights() {
    let outline = outline_from_html(&read_fixture("landing.html"), "https://acme.test");
    let titles: Vec<&str> = outline.highlights.iter().map(|h| h.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "Acme Studio",
            "We design and build fast, accessible websites for independent businesses around the world.",
            "Services",
            "We build great things for clients worldwide.",
            "Process",
            "Every project starts with a conversation about your goals and audience.",
        ]
    );
    assert!(outline.highlights.iter().all(|h| h.text.is_none()));
}

#[test]
fn test_landing_sections() {
    let outline = outline_from_html(&read_fixture("landing.html"), "https://acme.test");
    let titles: Vec<&str> = outline.sections.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "We design and build fast, accessible websites for independent businesses around the world.",
            "Services",
            "Process",
            "Discovery",
            "Pricing",
            "Contact",
        ]
    );

    let services = &outline.sections[1];
    assert_eq!(services.subtitle.as_deref(), Some("We build great things for clients worldwide."));
    assert_eq!(services.points, vec!["Fast", "Reliable", "Accessible"]);

    let process = &outline.sections[2];
    assert!(process.subtitle.is_none());
    assert_eq!(
        process.points,
        vec!["Short intro", "Every project starts with a conversation about your goals and audience."]
    );

    let discovery = &outline.sections[3];
    assert_eq!(
        discovery.subtitle.as_deref(),
        Some("We learn how your business works before writing any code.")
    );
    assert!(discovery.points.is_empty());

    let contact = &outline.sections[5];
    assert_eq!(contact.subtitle.as_deref(), Some("Chat on WhatsApp Email us Twitter Partner"));
}

#[test]
fn test_empty_content() {
    let html = read_fixture("empty_content.html");

    let outline = outline_from_html(&html, "https://empty.test");
    assert!(outline.title.is_none());
    assert!(outline.description.is_none());
    assert!(outline.highlights.is_empty());
    assert!(outline.sections.is_empty());

    assert!(contacts_from_html(&html).is_empty());
}

#[test]
fn test_malformed_markup() {
    let html = read_fixture("malformed.html");

    let contacts = contacts_from_html(&html);
    assert_eq!(contacts.email.as_deref(), Some("Someone@Example.com"));
    assert_eq!(contacts.x.as_deref(), Some("https://x.com/"));
    assert!(contacts.instagram.is_none());

    let outline = outline_from_html(&html, "file");
    assert!(outline.title.as_deref().is_some_and(|t| t.contains("Broken")));
    assert!(!outline.sections.is_empty());
    assert!(outline.sections.iter().all(Section::is_non_empty));
}

#[test]
fn test_caps_hold_on_generated_page() {
    let mut html = String::from("<html><body>");
    for i in 0..30 {
        html.push_str(&format!("<h2>Section {i}</h2>"));
        html.push_str(&format!("<p>Paragraph {i} has more than enough words to qualify here.</p>"));
        for j in 0..20 {
            html.push_str(&format!("<li>Point {i}.{j}</li>"));
        }
    }
    html.push_str("</body></html>");

    let config = OutlineConfig::default();
    let outline = outline_from_html(&html, "gen");

    assert_eq!(outline.highlights.len(), config.max_highlights);
    assert_eq!(outline.sections.len(), config.max_sections);
    assert!(outline.sections.iter().all(|s| s.points.len() <= config.max_points));
    assert_eq!(outline.sections[0].points.len(), config.max_points);
    assert_eq!(outline.sections[0].points[0], "Point 0.0");
}

#[test]
fn test_highlight_scan_window_bounds_the_search() {
    let mut html = String::new();
    for i in 0..50 {
        html.push_str(&format!("<li>filler {i}</li>"));
    }
    html.push_str("<h1>Too late</h1>");

    let outline = outline_from_html(&html, "gen");
    assert!(outline.highlights.is_empty());
    assert_eq!(outline.sections.len(), 1);
    assert_eq!(outline.sections[0].title, "Highlights");
}

#[test]
fn test_long_paragraph_highlight_is_excerpted() {
    let sentence = "word ".repeat(60);
    let html = format!("<p>{sentence}</p>");

    let outline = outline_from_html(&html, "gen");
    let title = &outline.highlights[0].title;
    assert_eq!(title.chars().count(), 121);
    assert!(title.ends_with('…'));
}

#[test]
fn test_extraction_is_idempotent() {
    let html = read_fixture("landing.html");

    assert_eq!(outline_from_html(&html, "s"), outline_from_html(&html, "s"));
    assert_eq!(contacts_from_html(&html), contacts_from_html(&html));
}

#[test]
fn test_scraper_builder() {
    let config = ScraperConfig::builder().max_sections(2).max_points(1).max_highlights(2).build();
    let scraper = Scraper::with_config(config);

    let outline = scraper.outline_from_html(&read_fixture("landing.html"), "https://acme.test");
    assert_eq!(outline.highlights.len(), 2);
    assert_eq!(outline.sections.len(), 2);
    assert_eq!(outline.sections[1].points, vec!["Fast"]);
}

#[test]
fn test_report_formats() {
    let html = read_fixture("landing.html");
    let report = PageReport {
        contacts: Some(contacts_from_html(&html)),
        outline: Some(outline_from_html(&html, "https://acme.test")),
    };

    let json = convert_to_json(&report, &JsonConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["contacts"]["email"], "hello@acme.test");
    assert_eq!(value["outline"]["sections"][1]["title"], "Services");

    let md = convert_to_markdown(&report, &MarkdownConfig::default());
    assert!(md.contains("## Services"));
    assert!(md.contains("hello@acme.test"));

    let text = convert_to_text(&report, &TextConfig::default());
    assert!(text.contains("Services"));
}

#[test]
fn test_fetch_file_missing() {
    let result = fetch_file("../../tests/fixtures/does_not_exist.html");
    assert!(matches!(result, Err(SiteliftError::FileNotFound(_))));
}

#[test]
fn test_fetch_file_reads_fixture() {
    let html = fetch_file(&get_fixture_path("landing.html")).unwrap();
    assert!(html.contains("Acme Studio"));
}

#[cfg(feature = "fetch")]
mod remote {
    use std::time::Duration;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::response::Html;
    use axum::routing::get;
    use sitelift_core::*;

    const PAGE: &str = r#"<html><head><title>Remote</title></head>
        <body><h2>Menu</h2><li>Coffee</li><a href="https://instagram.com/cafe">ig</a></body></html>"#;

    async fn serve() -> String {
        let router = Router::new()
            .route("/", get(|| async { Html(PAGE) }))
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nope") }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    Html(PAGE)
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_extract_contacts_from_server() {
        let base = serve().await;
        let contacts = extract_contacts(&format!("{base}/")).await.unwrap();

        assert_eq!(contacts.instagram.as_deref(), Some("https://instagram.com/cafe"));
        assert!(contacts.email.is_none());
    }

    #[tokio::test]
    async fn test_extract_outline_echoes_source() {
        let base = serve().await;
        let url = format!("{base}/");
        let outline = extract_outline(&url).await.unwrap();

        assert_eq!(outline.source, url);
        assert_eq!(outline.title.as_deref(), Some("Remote"));
        assert_eq!(outline.sections[0].title, "Menu");
        assert_eq!(outline.sections[0].points, vec!["Coffee"]);
    }

    #[tokio::test]
    async fn test_not_found_is_status_error() {
        let base = serve().await;
        let result = extract_outline(&format!("{base}/missing")).await;

        match result {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_source_times_out() {
        let base = serve().await;
        let scraper = Scraper::with_config(ScraperConfig::builder().timeout(1).build());
        let result = scraper.extract_contacts(&format!("{base}/slow")).await;

        match result {
            Err(err) => assert!(err.is_timeout(), "expected timeout, got {err:?}"),
            Ok(contacts) => panic!("expected timeout, got {contacts:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_source_is_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = extract_contacts(&format!("http://{addr}/")).await;
        assert!(result.is_err());
    }
}
