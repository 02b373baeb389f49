use super::*;
use motion::background::FALLBACK_BACKDROP_COLOR;
use pretty_assertions::assert_eq;
use shared::validation::Field;

fn dark_page() -> PageConfig {
    PageConfig::new(ThemeMode::Dark, 2025)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn toggle_link_points_at_the_other_theme() {
    let dark = render_landing(&dark_page());
    assert!(dark.contains("href=\"/?theme=light\""));
    assert!(dark.contains("data-theme=\"dark\""));
    assert!(dark.contains("icon-sun"));

    let light = render_landing(&dark_page().with_theme(ThemeMode::Light));
    assert!(light.contains("href=\"/?theme=dark\""));
    assert!(light.contains("icon-moon"));
    assert!(light.contains("bg-white text-slate-900"));
}

#[test]
fn every_section_is_present() {
    let page = render_landing(&dark_page());
    for id in ["id=\"about\"", "id=\"services\"", "id=\"work\"", "id=\"contact\""] {
        assert!(page.contains(id), "missing {id}");
    }
    assert_eq!(count(&page, "<article"), 3);
    assert_eq!(count(&page, "<figure"), 2);
    assert!(page.contains("Web Experience"));
    assert!(page.contains("Flux Energy"));
    assert!(page.contains("© 2025 Washington Advert. All rights reserved."));
    assert!(page.contains("mailto:hello@washingtonadvert.com"));
}

#[test]
fn backdrop_palette_follows_theme() {
    let dark = render_landing(&dark_page());
    assert!(dark.contains("data-sparkle-color=\"#4FA3FF\""));
    assert!(dark.contains("opacity:0.5"));

    let light = render_landing(&dark_page().with_theme(ThemeMode::Light));
    assert!(light.contains("data-sparkle-color=\"#2563EB\""));
    assert!(light.contains("data-cloud-color=\"#E2E8F0\""));
    assert!(light.contains("opacity:0.15"));
}

#[test]
fn missing_background_image_falls_back_to_flat_colour() {
    let mut config = dark_page();
    config.background_image_available = false;
    let page = render_landing(&config);
    assert!(!page.contains("background-image"));
    assert!(page.contains(&format!("background-color:{FALLBACK_BACKDROP_COLOR}")));
}

#[test]
fn no_rendering_support_gives_static_backdrop() {
    let mut config = dark_page();
    config.render_support.webgl = false;
    let page = render_landing(&config);
    assert!(page.contains("data-animated=\"false\""));
    assert!(!page.contains("data-scene="));
}

#[test]
fn space_scene_is_selectable() {
    let mut config = dark_page();
    config.scene = SceneKind::Space;
    let page = render_landing(&config);
    assert!(page.contains("data-scene=\"space\""));
    assert!(page.contains("data-particles=\"300\""));
}

#[test]
fn reveal_presets_start_hidden() {
    let page = render_landing(&dark_page());
    assert!(page.contains(
        "data-reveal-from=\"opacity:0;transform:translate(0px,50px) scale(1) rotate(0deg)\""
    ));
    assert!(page.contains(
        "data-reveal-from=\"opacity:0;transform:translate(-50px,0px) scale(1) rotate(0deg)\""
    ));
    assert!(page.contains("data-reveal-delay=\"0.4\""));
    assert!(page.contains("data-scroll-range=\"0,500\""));
}

#[test]
fn invalid_form_shows_inline_errors_and_keeps_values() {
    let mut form = ContactForm::with_values("Jane <b>", "not-an-email", "");
    form.validate().expect_err("email and message are invalid");

    let page = render_page(&dark_page(), &form);
    assert!(page.contains("Invalid email address"));
    assert!(page.contains("Message is required"));
    assert!(!page.contains("Name is required"));
    assert!(page.contains("value=\"Jane &lt;b&gt;\""));
    assert!(page.contains("value=\"not-an-email\""));
    assert_eq!(count(&page, "aria-invalid=\"true\""), 2);
}

#[test]
fn blank_form_renders_send_button_without_notice() {
    let page = render_landing(&dark_page());
    assert!(page.contains(">Send Inquiry</button>"));
    assert!(!page.contains("role=\"status\""));
    assert!(page.contains("action=\"/contact\""));
}

#[test]
fn contact_form_markup_is_stable() {
    let mut html = crate::html::Html::new();
    let mut form = ContactForm::new();
    form.set(Field::Name, "Jo");
    sections_field(&mut html, &form);
    assert_eq!(
        html.finish(),
        "<div class=\"form-item\"><label for=\"contact-name\" class=\"form-label\">Name</label>\
         <input id=\"contact-name\" name=\"name\" placeholder=\"John Doe\" \
         class=\"form-control rounded-xl\" type=\"text\" value=\"Jo\"></div>"
    );
}

fn sections_field(html: &mut crate::html::Html, form: &ContactForm) {
    crate::sections::field(
        html,
        form,
        Field::Name,
        "Name",
        content::CONTACT_PLACEHOLDERS.0,
    );
}
