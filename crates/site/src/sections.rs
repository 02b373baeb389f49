use client_core::{ContactForm, NoticeKind};
use motion::{
    background::{cloud_sprites, PlaneFill, ScenePalette},
    reveal::{nav_is_scrolled, stagger_delay, HeroScroll},
    space, Backdrop, Reveal, RevealState,
};
use shared::validation::Field;

use crate::{
    content::{self, Icon},
    html::Html,
    tokens::ThemeTokens,
    PageConfig, SceneKind,
};

/// Reveal configuration emitted as data attributes for the client runtime.
struct RevealAttrs {
    from: String,
    delay: String,
    once: &'static str,
}

impl RevealAttrs {
    fn new(reveal: Reveal, delay: f32) -> Self {
        Self {
            from: reveal.at(0.0).to_css(),
            delay: format!("{delay}"),
            once: "true",
        }
    }

    fn with_class<'a>(&'a self, class: &'a str) -> Vec<(&'a str, &'a str)> {
        vec![
            ("class", class),
            ("data-reveal-from", self.from.as_str()),
            ("data-reveal-delay", self.delay.as_str()),
            ("data-reveal-once", self.once),
        ]
    }
}

pub fn render_page(config: &PageConfig, form: &ContactForm) -> String {
    let tokens = ThemeTokens::for_theme(config.theme);
    let mut html = Html::new();

    html.raw("<!DOCTYPE html>");
    html.open(
        "html",
        &[("lang", "en"), ("data-theme", config.theme.as_str())],
    );
    html.open("head", &[]);
    html.raw("<meta charset=\"utf-8\">");
    html.raw(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
    );
    html.element(
        "title",
        &[],
        "Washington Advert | Premium Digital Experiences",
    );
    html.raw("<link rel=\"stylesheet\" href=\"/assets/site.css\">");
    html.close("head");

    let body_class = format!("min-h-screen relative {}", tokens.body);
    html.open("body", &[("class", body_class.as_str())]);

    backdrop(&mut html, config);
    navigation(&mut html, config, &tokens);

    html.open("main", &[("class", "relative z-10")]);
    hero(&mut html);
    about(&mut html);
    services(&mut html, &tokens);
    works(&mut html);
    contact(&mut html, config, form);
    html.close("main");

    footer(&mut html, config);
    html.close("body");
    html.close("html");
    html.finish()
}

fn backdrop(html: &mut Html, config: &PageConfig) {
    match Backdrop::select(config.render_support, config.theme) {
        Backdrop::Static { color } => {
            let style = format!("background-color:{color}");
            html.open(
                "div",
                &[
                    ("class", "backdrop fixed inset-0 z-0 pointer-events-none"),
                    ("data-animated", "false"),
                    ("style", style.as_str()),
                ],
            );
            html.close("div");
        }
        Backdrop::Animated(pipeline) => match config.scene {
            SceneKind::Atmosphere => atmosphere(html, pipeline.palette(), config),
            SceneKind::Space => space_scene(html),
        },
    }
}

fn atmosphere(html: &mut Html, palette: &ScenePalette, config: &PageConfig) {
    let fill = match PlaneFill::resolve(palette, config.background_image_available) {
        PlaneFill::Image { url, opacity } => {
            format!("background-image:url({url});opacity:{opacity}")
        }
        PlaneFill::Color { color } => format!("background-color:{color}"),
    };
    let sparkle_opacity = palette.sparkle_opacity.to_string();
    let light = palette.light_intensity.to_string();
    let ambient = palette.ambient_intensity.to_string();

    html.open(
        "div",
        &[
            ("class", "backdrop absolute inset-0 z-0 h-full w-full pointer-events-none"),
            ("data-animated", "true"),
            ("data-scene", SceneKind::Atmosphere.as_str()),
            ("data-sparkle-color", palette.sparkle_color),
            ("data-sparkle-opacity", sparkle_opacity.as_str()),
            ("data-cloud-color", palette.cloud_color),
            ("data-light-color", palette.light_color),
            ("data-light-intensity", light.as_str()),
            ("data-ambient-intensity", ambient.as_str()),
        ],
    );
    html.open(
        "div",
        &[("class", "backdrop-plane"), ("style", fill.as_str())],
    );
    html.close("div");
    for sprite in cloud_sprites() {
        let position = format!(
            "{},{},{}",
            sprite.position.x, sprite.position.y, sprite.position.z
        );
        let opacity = sprite.opacity.to_string();
        html.open(
            "span",
            &[
                ("class", "backdrop-cloud"),
                ("data-position", position.as_str()),
                ("data-opacity", opacity.as_str()),
            ],
        );
        html.close("span");
    }
    html.close("div");
}

fn space_scene(html: &mut Html) {
    let style = format!("background-color:{}", space::BACKGROUND_COLOR);
    let fog = format!("{},{}", space::FOG_NEAR, space::FOG_FAR);
    let particles = space::DEFAULT_PARTICLE_COUNT.to_string();
    html.open(
        "div",
        &[
            ("class", "backdrop fixed inset-0 z-[-1] pointer-events-none"),
            ("data-animated", "true"),
            ("data-scene", SceneKind::Space.as_str()),
            ("data-fog", fog.as_str()),
            ("data-particles", particles.as_str()),
            ("style", style.as_str()),
        ],
    );
    html.open(
        "div",
        &[(
            "class",
            "absolute inset-0 bg-gradient-to-b from-slate-950/30 via-transparent to-slate-950/80",
        )],
    );
    html.close("div");
    html.close("div");
}

fn icon(html: &mut Html, icon: Icon, class: &str) {
    let class = format!("icon icon-{} {class}", icon.name());
    html.open("i", &[("class", class.as_str()), ("aria-hidden", "true")]);
    html.close("i");
}

fn navigation(html: &mut Html, config: &PageConfig, tokens: &ThemeTokens) {
    let header_class = tokens.header_class(nav_is_scrolled(0.0));
    html.open("header", &[("class", header_class.as_str())]);
    html.open(
        "div",
        &[("class", "container mx-auto px-6 flex items-center justify-between")],
    );

    let brand_class = format!("font-display text-2xl font-bold tracking-tight {}", tokens.text);
    html.open("a", &[("href", "/"), ("class", brand_class.as_str())]);
    html.text(content::BRAND);
    html.element(
        "span",
        &[("class", "text-[#2563EB] font-light ml-2")],
        content::BRAND_ACCENT,
    );
    html.close("a");

    html.open("nav", &[("class", "hidden md:flex items-center gap-8")]);
    let link_class = format!(
        "text-xs uppercase tracking-[0.2em] font-bold {} {}",
        tokens.sub_text, tokens.sub_text_hover
    );
    for link in content::NAV_LINKS {
        html.element(
            "a",
            &[("href", link.href), ("class", link_class.as_str())],
            link.label,
        );
    }

    let toggle_href = format!("/?theme={}", config.theme.toggled());
    let toggle_class = format!("theme-toggle p-2 rounded-full {}", tokens.toggle_button);
    html.open(
        "a",
        &[
            ("href", toggle_href.as_str()),
            ("class", toggle_class.as_str()),
            ("title", "Toggle Theme"),
        ],
    );
    icon(
        html,
        config.theme.pick(Icon::Sun, Icon::Moon),
        "w-[18px] h-[18px]",
    );
    html.close("a");

    html.element(
        "a",
        &[
            ("href", content::NAV_CTA.href),
            (
                "class",
                "px-6 py-2.5 bg-[#2563EB] text-white text-xs font-bold \
                 uppercase tracking-widest rounded-full",
            ),
        ],
        content::NAV_CTA.label,
    );
    html.close("nav");
    html.close("div");
    html.close("header");
}

fn hero(html: &mut Html) {
    let (opacity, offset_y) = HeroScroll::new().at(0.0);
    let style = RevealState {
        opacity,
        y: offset_y,
        ..RevealState::SETTLED
    }
    .to_css();
    let scroll_range = format!("0,{}", HeroScroll::DISTANCE);

    html.open(
        "section",
        &[(
            "class",
            "h-screen flex items-center justify-center px-6 relative overflow-hidden",
        )],
    );
    html.open(
        "div",
        &[
            ("class", "hero text-center max-w-5xl mx-auto"),
            ("style", style.as_str()),
            ("data-scroll-range", scroll_range.as_str()),
            ("data-scroll-opacity", "1,0"),
            ("data-scroll-y", "0,200"),
        ],
    );

    let kicker = RevealAttrs::new(Reveal::fade_up(50.0), 0.2);
    html.open("div", &kicker.with_class("hero-kicker"));
    html.element(
        "h2",
        &[("class", "text-sm font-bold tracking-[0.3em] uppercase text-primary mb-6")],
        content::HERO.kicker,
    );
    html.close("div");

    let headline = RevealAttrs::new(Reveal::zoom_in(0.9), 0.4);
    html.open(
        "h1",
        &headline.with_class(
            "font-display text-5xl md:text-7xl lg:text-9xl font-semibold tracking-tighter",
        ),
    );
    let [first, second, third] = content::HERO.headline;
    html.text(first).raw("<br>");
    html.element("span", &[("class", "italic font-light")], second);
    html.raw("<br>").text(third);
    html.close("h1");

    let lede = RevealAttrs::new(Reveal::fade_in(), 0.8);
    html.element(
        "p",
        &lede.with_class(
            "text-lg md:text-xl max-w-2xl mx-auto font-light leading-relaxed",
        ),
        content::HERO.lede,
    );

    let cta = RevealAttrs::new(Reveal::fade_up(20.0), 1.0);
    html.open("div", &cta.with_class("mt-12"));
    html.open(
        "a",
        &[
            ("href", content::HERO.cta.href),
            ("class", "group inline-flex items-center gap-2 text-sm uppercase tracking-widest"),
        ],
    );
    html.text(content::HERO.cta.label);
    icon(html, Icon::ArrowRight, "w-4 h-4");
    html.close("a");
    html.close("div");

    html.close("div");
    html.close("section");
}

fn about(html: &mut Html) {
    html.open(
        "section",
        &[("id", "about"), ("class", "py-32 px-6 relative")],
    );
    html.open(
        "div",
        &[("class", "container mx-auto grid grid-cols-1 md:grid-cols-2 gap-16 items-center")],
    );

    let heading = RevealAttrs::new(Reveal::slide_in(-50.0), 0.0);
    html.open(
        "h2",
        &heading.with_class("font-display text-4xl md:text-6xl mb-8 leading-tight"),
    );
    html.text(content::ABOUT_HEADLINE.0).raw("<br>");
    html.element(
        "span",
        &[("class", "text-primary italic")],
        content::ABOUT_HEADLINE.1,
    );
    html.close("h2");

    html.open("div", &[]);
    for (index, paragraph) in content::ABOUT_PARAGRAPHS.iter().enumerate() {
        let attrs = RevealAttrs::new(Reveal::slide_in(50.0), stagger_delay(0.2, index, 0.2));
        html.element(
            "p",
            &attrs.with_class("text-lg leading-relaxed font-light mb-8"),
            paragraph,
        );
    }
    html.close("div");

    html.close("div");
    html.close("section");
}

fn services(html: &mut Html, tokens: &ThemeTokens) {
    html.open(
        "section",
        &[("id", "services"), ("class", "py-32 px-6 backdrop-blur-sm relative")],
    );
    html.open("div", &[("class", "container mx-auto")]);

    let heading = RevealAttrs::new(Reveal::fade_up(50.0), 0.0);
    html.open("div", &heading.with_class("text-center mb-20"));
    html.element(
        "span",
        &[("class", "text-primary text-sm font-bold uppercase tracking-widest mb-2 block")],
        content::SERVICES_KICKER,
    );
    html.element(
        "h2",
        &[("class", "font-display text-4xl md:text-6xl")],
        content::SERVICES_HEADLINE,
    );
    html.close("div");

    html.open("div", &[("class", "grid grid-cols-1 md:grid-cols-3 gap-8")]);
    let card_class = format!("service group p-8 rounded-2xl border {}", tokens.card);
    for (index, service) in content::SERVICES.iter().enumerate() {
        let attrs = RevealAttrs::new(Reveal::fade_up(30.0), stagger_delay(0.0, index, 0.2));
        html.open("article", &attrs.with_class(&card_class));
        html.open(
            "div",
            &[(
                "class",
                "w-12 h-12 rounded-full bg-primary/20 flex items-center justify-center mb-6",
            )],
        );
        icon(html, service.icon, "w-6 h-6");
        html.close("div");
        html.element(
            "h3",
            &[("class", "text-xl font-bold mb-4 font-display tracking-wide")],
            service.title,
        );
        html.element(
            "p",
            &[("class", "leading-relaxed font-light")],
            service.description,
        );
        html.close("article");
    }
    html.close("div");

    html.close("div");
    html.close("section");
}

fn works(html: &mut Html) {
    html.open("section", &[("id", "work"), ("class", "py-32 px-6")]);
    html.open("div", &[("class", "container mx-auto text-center")]);

    let heading = RevealAttrs::new(Reveal::zoom_in(0.95), 0.0);
    html.element(
        "h2",
        &heading.with_class("font-display text-4xl md:text-5xl mb-16"),
        content::WORKS_HEADLINE,
    );

    html.open("div", &[("class", "grid grid-cols-1 md:grid-cols-2 gap-8")]);
    for (index, work) in content::WORKS.iter().enumerate() {
        let attrs = RevealAttrs::new(Reveal::fade_up(20.0), stagger_delay(0.0, index, 0.2));
        html.open(
            "figure",
            &attrs.with_class(
                "work relative group overflow-hidden rounded-lg aspect-video",
            ),
        );
        html.open(
            "img",
            &[
                ("src", work.image_url),
                ("alt", work.title),
                ("loading", "lazy"),
                ("class", "w-full h-full object-cover"),
            ],
        );
        html.open(
            "figcaption",
            &[("class", "absolute bottom-0 left-0 p-8 z-20")],
        );
        html.element(
            "p",
            &[("class", "text-primary text-sm font-bold uppercase tracking-widest mb-2")],
            work.category,
        );
        html.element(
            "h3",
            &[("class", "text-3xl font-display font-bold")],
            work.title,
        );
        html.close("figcaption");
        html.close("figure");
    }
    html.close("div");

    html.close("div");
    html.close("section");
}

fn contact(html: &mut Html, config: &PageConfig, form: &ContactForm) {
    html.open(
        "section",
        &[("id", "contact"), ("class", "py-32 px-6 relative")],
    );
    html.open("div", &[("class", "container mx-auto max-w-4xl")]);
    html.open(
        "div",
        &[("class", "backdrop-blur-xl border border-white/10 rounded-3xl p-8 md:p-16")],
    );

    html.open("div", &[("class", "text-center mb-12")]);
    html.element(
        "h2",
        &[("class", "font-display text-4xl md:text-5xl mb-4")],
        content::CONTACT_HEADLINE,
    );
    html.element("p", &[], content::CONTACT_LEDE);
    html.close("div");

    if let Some(notice) = form.notice() {
        let kind = match notice.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        };
        html.open("div", &[("class", kind), ("role", "status")]);
        html.element("strong", &[], &notice.title);
        html.element("p", &[], &notice.description);
        html.close("div");
    }

    html.open(
        "form",
        &[
            ("method", "post"),
            ("action", config.form_action.as_str()),
            ("class", "space-y-6"),
            ("novalidate", "novalidate"),
        ],
    );
    html.open(
        "input",
        &[("type", "hidden"), ("name", "theme"), ("value", config.theme.as_str())],
    );
    let (name_hint, email_hint, message_hint) = content::CONTACT_PLACEHOLDERS;
    html.open("div", &[("class", "grid grid-cols-1 md:grid-cols-2 gap-6")]);
    field(html, form, Field::Name, "Name", name_hint);
    field(html, form, Field::Email, "Email", email_hint);
    html.close("div");
    field(html, form, Field::Message, "Message", message_hint);

    let mut button = vec![
        ("type", "submit"),
        ("class", "w-full h-14 rounded-xl bg-white text-lg font-bold tracking-wide"),
    ];
    if form.is_pending() {
        button.push(("disabled", "disabled"));
    }
    html.element("button", &button, form.submit_label());
    html.close("form");

    html.close("div");
    html.close("div");
    html.close("section");
}

pub(crate) fn field(
    html: &mut Html,
    form: &ContactForm,
    field: Field,
    label: &str,
    placeholder: &str,
) {
    let id = format!("contact-{}", field.as_str());
    let error = form.error(field);

    html.open("div", &[("class", "form-item")]);
    html.element(
        "label",
        &[("for", id.as_str()), ("class", "form-label")],
        label,
    );

    let mut attrs = vec![
        ("id", id.as_str()),
        ("name", field.as_str()),
        ("placeholder", placeholder),
        ("class", "form-control rounded-xl"),
    ];
    if error.is_some() {
        attrs.push(("aria-invalid", "true"));
    }
    if field == Field::Message {
        html.element("textarea", &attrs, form.value(field));
    } else {
        let input_type = if field == Field::Email { "email" } else { "text" };
        attrs.push(("type", input_type));
        attrs.push(("value", form.value(field)));
        html.open("input", &attrs);
    }

    if let Some(message) = error {
        html.element(
            "p",
            &[("class", "form-message text-red-400 text-sm")],
            message,
        );
    }
    html.close("div");
}

fn footer(html: &mut Html, config: &PageConfig) {
    html.open(
        "footer",
        &[("class", "relative z-10 pt-24 pb-12 border-t border-white/5")],
    );
    html.open("div", &[("class", "container mx-auto px-6")]);
    html.open(
        "div",
        &[("class", "grid grid-cols-1 md:grid-cols-4 gap-12 mb-16")],
    );

    html.open("div", &[("class", "col-span-1 md:col-span-2")]);
    html.open(
        "a",
        &[("href", "/"), ("class", "font-display text-3xl font-bold tracking-tight mb-6 block")],
    );
    html.text(content::BRAND);
    html.element(
        "span",
        &[("class", "text-primary font-light ml-2")],
        content::BRAND_ACCENT,
    );
    html.close("a");
    html.element(
        "p",
        &[("class", "max-w-md font-light leading-relaxed")],
        content::FOOTER_TAGLINE,
    );
    html.close("div");

    html.open("div", &[]);
    html.element(
        "h4",
        &[("class", "text-primary font-bold uppercase tracking-widest text-sm mb-6")],
        "Socials",
    );
    html.open("ul", &[("class", "space-y-4")]);
    for social in content::SOCIALS {
        html.open("li", &[]);
        html.element("a", &[("href", "#")], social);
        html.close("li");
    }
    html.close("ul");
    html.close("div");

    html.open("div", &[]);
    html.element(
        "h4",
        &[("class", "text-primary font-bold uppercase tracking-widest text-sm mb-6")],
        "Contact",
    );
    html.open("address", &[("class", "not-italic space-y-2")]);
    for line in content::ADDRESS_LINES {
        html.element("p", &[], line);
    }
    let mailto = format!("mailto:{}", content::CONTACT_EMAIL);
    html.open("p", &[("class", "mt-4")]);
    html.element("a", &[("href", mailto.as_str())], content::CONTACT_EMAIL);
    html.close("p");
    html.close("address");
    html.close("div");
    html.close("div");

    html.open(
        "div",
        &[(
            "class",
            "border-t border-white/5 pt-8 flex justify-between items-center \
             text-xs uppercase tracking-widest",
        )],
    );
    let copyright = format!("© {} Washington Advert. All rights reserved.", config.year);
    html.element("p", &[], &copyright);
    html.open("div", &[("class", "flex gap-6")]);
    for link in content::LEGAL_LINKS {
        html.element("a", &[("href", "#")], link);
    }
    html.close("div");
    html.close("div");

    html.close("div");
    html.close("footer");
}
