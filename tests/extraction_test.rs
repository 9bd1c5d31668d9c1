//! End-to-end content and metadata extraction with images disabled.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rs_goose::dom::Document;
use rs_goose::metadata::AdditionalDataExtractor;
use rs_goose::{Configuration, Extractor};

use common::{news_page, text_only_extractor, PAGE_URL, STORY};

#[test]
fn story_beats_link_sidebar() {
    let html = news_page("", "");
    let article = text_only_extractor().extract(PAGE_URL, Some(&html)).unwrap();

    let paragraphs: Vec<&str> = article.cleaned_text.split("\n\n").collect();
    assert_eq!(paragraphs, STORY.to_vec());
    assert!(!article.cleaned_text.contains("Ferry services"));
    assert!(!article.cleaned_text.contains("Home"));

    let content = article.content_html.as_deref().unwrap();
    assert!(content.contains(r#"id="story""#));
    assert!(article.warnings.is_empty());
}

#[test]
fn metadata_is_collected() {
    let head = r#"
        <meta name="description" content=" Overnight storm floods the harbour. ">
        <meta name="keywords" content="storm, coast">
        <meta property="article:published_time" content="2024-03-05T06:30:00Z">
        <link rel="canonical" href="/news/storm">"#;
    let html = news_page(head, "");
    let article = text_only_extractor().extract(PAGE_URL, Some(&html)).unwrap();

    assert_eq!(article.final_url, PAGE_URL);
    assert_eq!(article.title, "Storm hits the coast");
    assert_eq!(article.meta_description, "Overnight storm floods the harbour.");
    assert_eq!(article.meta_keywords, "storm, coast");
    assert_eq!(article.canonical_link, "https://example.com/news/storm");
    assert_eq!(article.domain, "example.com");
    assert_eq!(
        article.publish_date,
        Some(Utc.with_ymd_and_hms(2024, 3, 5, 6, 30, 0).unwrap())
    );
    assert_eq!(article.link_hash.len(), 40);
}

#[test]
fn canonical_link_defaults_to_final_url() {
    let html = news_page("", "");
    let article = text_only_extractor().extract(PAGE_URL, Some(&html)).unwrap();
    assert_eq!(article.canonical_link, PAGE_URL);
}

#[test]
fn tags_are_read_before_cleaning() {
    // the container matches the boilerplate pattern and is cleaned away
    let html = news_page(
        "",
        r#"<div class="tags"><a rel="tag" href="/topics/weather">Weather</a> <a href="/tag/coast">Coast</a></div>"#,
    );
    let article = text_only_extractor().extract(PAGE_URL, Some(&html)).unwrap();

    let tags: Vec<&str> = article.tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["Coast", "Weather"]);
    assert!(!article.cleaned_text.contains("Weather"));
}

#[test]
fn embedded_videos_are_collected() {
    let html = news_page(
        "",
        r#"<embed src="https://www.youtube.com/v/abc123" type="application/x-shockwave-flash">
           <embed src="https://ads.example.net/spot.swf">"#,
    );
    let article = text_only_extractor().extract(PAGE_URL, Some(&html)).unwrap();

    assert_eq!(article.movies.len(), 1);
    assert!(article.movies[0].contains("youtube.com/v/abc123"));
}

#[test]
fn page_without_content_keeps_metadata() {
    let html = r#"<html><head><title>Index | Example News</title></head>
        <body><div><a href="/a">One</a> <a href="/b">Two</a></div></body></html>"#;
    let article = text_only_extractor().extract(PAGE_URL, Some(html)).unwrap();

    assert_eq!(article.title, "Example News");
    assert!(article.content_html.is_none());
    assert!(!article.has_content());
    assert!(article.cleaned_text.is_empty());
    assert_eq!(article.warnings, vec!["No extractable content found".to_string()]);
}

#[test]
fn custom_additional_data_runs_on_raw_page() {
    struct ScriptCount;
    impl AdditionalDataExtractor for ScriptCount {
        fn extract(&self, doc: &Document) -> HashMap<String, String> {
            let count = doc.select("script").length();
            HashMap::from([("scripts".to_string(), count.to_string())])
        }
    }

    let extractor = Extractor::new(Configuration {
        enable_image_fetching: false,
        additional_data_extractor: Arc::new(ScriptCount),
        ..Configuration::default()
    });
    let html = news_page("<script>var a = 1;</script><script>var b = 2;</script>", "");
    let article = extractor.extract(PAGE_URL, Some(&html)).unwrap();

    // scripts are removed by the cleaner, so this only sees them before cleaning
    assert_eq!(article.additional_data.get("scripts").map(String::as_str), Some("2"));
}

#[test]
fn article_serializes_to_json() {
    let html = news_page(r#"<meta property="og:image" content="/lead.jpg">"#, "");
    let article = text_only_extractor().extract(PAGE_URL, Some(&html)).unwrap();

    let json: serde_json::Value = serde_json::to_value(&article).unwrap();
    assert_eq!(json["title"], "Storm hits the coast");
    assert_eq!(json["domain"], "example.com");
    assert!(json["top_image"].is_null());
    assert!(json["cleaned_text"].as_str().unwrap().starts_with("The storm moved"));
}
