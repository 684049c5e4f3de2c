use once_cell::sync::Lazy;

/// Select `<div class="p-articleBody"><a>`
pub(crate) static ARTICLE_LINK_SELECTOR: Lazy<kuchiki::Selectors> =
    Lazy::new(|| {
        kuchiki::Selectors::compile(r#"div[class="p-articleBody"] > a"#)
            .expect("invalid article link selector")
    });
