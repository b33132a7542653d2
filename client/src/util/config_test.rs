use super::*;

#[test]
fn absolute_asset_urls_pass_through() {
    assert_eq!(asset_url_with_base("", "https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    assert_eq!(asset_url_with_base("", "data:image/png;base64,xx"), "data:image/png;base64,xx");
}

#[test]
fn relative_asset_urls_use_api_base() {
    assert_eq!(asset_url_with_base("https://api.example.com/", "/content/a.png"), "https://api.example.com/content/a.png");
    assert_eq!(asset_url_with_base("https://api.example.com", "content/a.png"), "https://api.example.com/content/a.png");
}

#[test]
fn relative_asset_urls_fall_back_to_lithodat_origin() {
    assert_eq!(asset_url_with_base("", "/content/a.png"), "https://app.lithodat.com/content/a.png");
}

#[test]
fn blank_asset_url_stays_blank() {
    assert_eq!(asset_url_with_base("", "  "), "");
}

#[test]
fn tile_template_has_placeholders() {
    let template = tile_url_template();
    assert!(template.contains("{z}") && template.contains("{x}") && template.contains("{y}"));
}
