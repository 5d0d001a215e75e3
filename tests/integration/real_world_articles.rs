//! Realistic page layouts
//!
//! Trimmed-down versions of common news and blog templates.

#![allow(clippy::expect_used)]

use news_digest::{dom, extract, ContainerSource, Extractor, TextSource};
use pretty_assertions::assert_eq;

const NEWS_SITE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>City council approves transit budget | Metro Herald</title>
    <script async src="https://analytics.example/tag.js"></script>
    <style>.hero { height: 400px; }</style>
</head>
<body>
    <header class="site-header">
        <a href="/" class="logo">Metro Herald</a>
        <form role="search"><input type="search" name="q"><button>Search</button></form>
    </header>
    <nav class="primary"><a href="/local">Local</a> <a href="/politics">Politics</a></nav>
    <div class="cookie-banner">We use cookies to improve your experience. <button>Accept</button></div>
    <main>
        <article>
            <h1>City council approves transit budget</h1>
            <p class="byline">By Sam Rivera</p>
            <figure><img src="/img/bus.jpg"><figcaption>A city bus.</figcaption></figure>
            <p>The city council voted 7-2 on Tuesday to approve a transit budget that expands late-night bus service.</p>
            <div class="ad-container"><p>Advertisement: Try our premium subscription for only a dollar a week!</p></div>
            <p>Council members who backed the plan said it would help shift workers reach jobs downtown.</p>
            <p>The two dissenting members said the budget relies too heavily on one-time federal grants.</p>
            <div class="share-tools"><p>Share this story on Facebook, Twitter, or by email with friends.</p></div>
            <p>The new routes are scheduled to begin operating in the spring.</p>
        </article>
        <section class="related-stories"><p>Related: Mayor proposes new bike lanes across the downtown core area.</p></section>
    </main>
    <aside class="sidebar"><p>Most read: Ten restaurants you need to try this weekend in the city.</p></aside>
    <div id="comments"><p>Reader comment: This is the best news I have heard all year long, honestly.</p></div>
    <footer><p>Copyright 2024 Metro Herald. All rights reserved worldwide.</p></footer>
</body>
</html>"#;

const WORDPRESS_BLOG: &str = r#"<html><body>
    <div id="page">
        <div id="content">
            <div class="entry-content">
                <p>I spent the last three weekends rebuilding the garden beds behind the house.</p>
                <p>The old cedar boards had rotted through, so everything had to come apart first.</p>
                <p>Tip: wear gloves.</p>
                <p>After that, the new boards went together in an afternoon with a borrowed drill.</p>
                <p>Next spring I plan to add a drip irrigation line along the back fence.</p>
                <div class="newsletter-signup"><p>Join 10,000 readers and get every post delivered to your inbox.</p></div>
            </div>
            <div class="comment-list"><p>Great post! I did the same thing last year and it worked well.</p></div>
        </div>
    </div>
</body></html>"#;

const DIV_SOUP: &str = r#"<html><body>
    <div id="main">
        <div class="headline">Storm knocks out power to thousands</div>
        <div class="text">Crews worked overnight to restore electricity after high winds
            downed lines across the county.</div>
        <div class="text">Officials expect most customers to have power back by Friday.</div>
        <p>Updated 6:00 a.m.</p>
    </div>
    <div class="popup-overlay">Before you go, check out our deals!</div>
</body></html>"#;

#[test]
fn test_news_site_article() {
    let doc = dom::parse(NEWS_SITE);
    let result = Extractor::default().extract_detailed(&doc);

    assert!(matches!(result.container, ContainerSource::Selector { ref selector, .. } if selector == "article"));
    assert_eq!(result.text_source, Some(TextSource::Paragraphs));
    assert_eq!(
        result.text,
        "The city council voted 7-2 on Tuesday to approve a transit budget that expands late-night bus service.\n\n\
         Council members who backed the plan said it would help shift workers reach jobs downtown.\n\n\
         The two dissenting members said the budget relies too heavily on one-time federal grants.\n\n\
         The new routes are scheduled to begin operating in the spring."
    );

    for noise in ["Advertisement", "Share this story", "Related:", "Most read", "Reader comment", "cookies", "Copyright"] {
        assert!(!result.text.contains(noise), "should not contain {noise:?}");
    }
}

#[test]
fn test_wordpress_entry_content() {
    let doc = dom::parse(WORDPRESS_BLOG);
    let result = Extractor::default().extract_detailed(&doc);

    assert!(matches!(result.container, ContainerSource::Selector { index: 3, .. }));
    assert_eq!(
        result.text,
        "I spent the last three weekends rebuilding the garden beds behind the house.\n\n\
         The old cedar boards had rotted through, so everything had to come apart first.\n\n\
         After that, the new boards went together in an afternoon with a borrowed drill.\n\n\
         Next spring I plan to add a drip irrigation line along the back fence."
    );
}

#[test]
fn test_div_based_layout_uses_container_text() {
    let doc = dom::parse(DIV_SOUP);
    let result = Extractor::default().extract_detailed(&doc);

    assert!(matches!(result.container, ContainerSource::Selector { ref selector, .. } if selector == "#main"));
    assert_eq!(result.text_source, Some(TextSource::Container));
    assert_eq!(
        result.text,
        "Storm knocks out power to thousands Crews worked overnight to restore electricity after high winds \
         downed lines across the county. Officials expect most customers to have power back by Friday. \
         Updated 6:00 a.m."
    );
}

#[test]
fn test_page_title_is_never_extracted() {
    // <title> lives in <head>, outside every container candidate
    assert!(!extract(NEWS_SITE).contains("Metro Herald"));
}

#[test]
fn test_denoise_report_for_news_site() {
    let doc = dom::parse(NEWS_SITE);
    let result = Extractor::default().extract_detailed(&doc);

    assert!(result.denoise.tags_removed >= 6, "removed {:?}", result.denoise);
    assert!(result.denoise.selectors_removed >= 5, "removed {:?}", result.denoise);
    assert!(result.denoise.invalid_selectors.is_empty());
}
