//! Block dispatch: one renderer per block type.
//!
//! `render_block` is a pure function of the block's type, payload, settings
//! and effects. Dynamic inputs (the company settings record and the current
//! time) come in through [`RenderContext`] so output stays deterministic
//! under test.

use pagecraft_core::blocks::{
    AccordionData, ButtonData, CardItem, CardsData, CarouselData, CompanyInfoData,
    ContactFormData, ContentPosition, CounterData, CountdownData, DividerData, FlipCardsData,
    FlipTrigger, GalleryData, GoogleMapData, HeroBannerData, HeroData, IconBoxData, ImageCardData,
    ImageData, MediaRef, QuoteData, SpacerData, StyledTextData, TestimonialData, TextAlign,
    TextCardsData, TextData, VideoData,
};
use pagecraft_core::document::Spacing;
use pagecraft_core::{
    Block, BlockData, BlockSettings, Column, ColumnLayout, EffectFlags, MobileOrder, PageContent,
    Presentation, Row, compose, mobile_order,
};

use crate::animate::{Countdown, CountdownTick, ExpiryAction};
use crate::hero;
use crate::tree::{ElementNode, RenderNode};

/// Externally supplied company settings record, fetched once by the host.
#[derive(Debug, Clone, Default)]
pub struct CompanyProfile {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
}

/// Dynamic inputs a render pass needs beyond the document itself.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub company: CompanyProfile,
    /// Current time, for countdown blocks.
    pub now_epoch_ms: i64,
}

/// Renders a full page. Classic pages pass their stored markup through
/// verbatim; builder pages render row by row.
pub fn render_page(content: &PageContent, ctx: &RenderContext) -> RenderNode {
    match content {
        PageContent::Classic { html } => RenderNode::Raw(html.clone()),
        PageContent::Builder { rows } => {
            let mut page = RenderNode::element("div").class("page");
            for row in rows {
                page = page.child(render_row(row, ctx));
            }
            page.build()
        }
    }
}

/// Renders one row: section shell, responsive grid, ordered columns.
pub fn render_row(row: &Row, ctx: &RenderContext) -> RenderNode {
    let layout = ColumnLayout::resolve(row.columns.len());

    let mut section = RenderNode::element("section").class("row");
    section = apply_spacing(section, &row.settings.padding, &row.settings.margin);
    if let Some(color) = &row.settings.background_color {
        section = section.style("background-color", color.clone());
    }
    if row.settings.overlap > 0 {
        section = section
            .style("margin-top", format!("-{}px", row.settings.overlap))
            .style("z-index", row.settings.overlap.to_string())
            .style("position", "relative");
    }
    if row.is_full_bleed() {
        section = section.class("row-full-bleed");
    }

    let template = if layout.uses_weights {
        row.columns
            .iter()
            .take(layout.desktop_tracks)
            .map(|c| format!("{}fr", c.width))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        format!("repeat({}, 1fr)", layout.desktop_tracks)
    };
    let mut grid = RenderNode::element("div")
        .class("row-grid")
        .style("grid-template-columns", template)
        .attr("data-tablet-cols", layout.tablet_tracks.to_string())
        .attr("data-mobile-cols", layout.mobile_tracks.to_string());
    if !row.settings.stack_on_mobile {
        grid = grid.class("row-no-stack");
    }

    let order = mobile_order(&row.columns, row.settings.mobile_order);
    for (index, column) in row.columns.iter().enumerate() {
        let mut node = render_column(column, ctx);
        if row.settings.mobile_order != MobileOrder::Default
            && let Some(position) = order.iter().position(|&i| i == index)
            && position != index
        {
            node = node.style("--mobile-order", position.to_string());
        }
        grid = grid.child(node.build());
    }

    section.child(grid.build()).build()
}

fn render_column(column: &Column, ctx: &RenderContext) -> ElementNode {
    let mut node = RenderNode::element("div").class("column");
    for block in &column.blocks {
        node = node.child(render_block(block, ctx));
    }
    node
}

/// Renders one block: type-specific body wrapped in a shell carrying the
/// block's settings and composed effects. Unknown types render nothing.
pub fn render_block(block: &Block, ctx: &RenderContext) -> RenderNode {
    let effects = block.effects.clone().unwrap_or_default();
    let body = render_data(&block.data, &effects, ctx);
    if body.is_empty() {
        return RenderNode::Empty;
    }

    let mut shell = RenderNode::element("div")
        .class("block")
        .class(format!("block-{}", block.data.type_name()));
    if let Some(settings) = &block.settings {
        shell = apply_settings(shell, settings);
    }
    shell = apply_presentation(shell, &compose(&effects, 0));
    shell.child(body).build()
}

fn render_data(data: &BlockData, effects: &EffectFlags, ctx: &RenderContext) -> RenderNode {
    match data {
        BlockData::Text(d) => render_text(d),
        BlockData::StyledText(d) => render_styled_text(d),
        BlockData::Image(d) => render_image(d),
        BlockData::ImageCard(d) => render_image_card(d),
        BlockData::Gallery(d) => render_gallery(d),
        BlockData::HeroBanner(d) => render_hero_banner(d),
        BlockData::Hero(d) => render_hero(d),
        BlockData::Carousel(d) => render_carousel(d),
        BlockData::Video(d) => render_video(d),
        BlockData::Button(d) => render_button(d),
        BlockData::Cards(d) => render_cards(d, effects),
        BlockData::FlipCards(d) => render_flip_cards(d, effects),
        BlockData::TextCards(d) => render_text_cards(d, effects),
        BlockData::Counter(d) => render_counter(d),
        BlockData::Testimonial(d) => render_testimonial(d),
        BlockData::Accordion(d) => render_accordion(d),
        BlockData::IconBox(d) => render_icon_box(d),
        BlockData::Quote(d) => render_quote(d),
        BlockData::ContactForm(d) => render_contact_form(d),
        BlockData::CompanyInfo(d) => render_company_info(d, &ctx.company),
        BlockData::GoogleMap(d) => render_google_map(d),
        BlockData::Spacer(d) => render_spacer(d),
        BlockData::Divider(d) => render_divider(d),
        BlockData::Html(d) => RenderNode::Raw(d.html.clone()),
        BlockData::Countdown(d) => render_countdown(d, ctx.now_epoch_ms),
        BlockData::Unknown { type_name, .. } => {
            log::debug!("skipping unrecognized block type {type_name}");
            RenderNode::Empty
        }
    }
}

fn apply_spacing(mut node: ElementNode, padding: &Spacing, margin: &Spacing) -> ElementNode {
    let box_value =
        |s: &Spacing| format!("{}px {}px {}px {}px", s.top, s.right, s.bottom, s.left);
    if *padding != Spacing::default() {
        node = node.style("padding", box_value(padding));
    }
    if *margin != Spacing::default() {
        node = node.style("margin", box_value(margin));
    }
    node
}

fn apply_settings(mut node: ElementNode, settings: &BlockSettings) -> ElementNode {
    node = apply_spacing(node, &settings.padding, &settings.margin);
    if let Some(color) = &settings.background_color {
        node = node.style("background-color", color.clone());
    }
    if let Some(color) = &settings.text_color {
        node = node.style("color", color.clone());
    }
    node
}

fn apply_presentation(mut node: ElementNode, presentation: &Presentation) -> ElementNode {
    node = node.classes(presentation.class_names.iter().cloned());
    for (var, value) in &presentation.style_vars {
        node = node.style(var.clone(), value.clone());
    }
    node
}

fn text_align_value(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

fn img(asset: &MediaRef, alt: &str) -> RenderNode {
    let mut node = RenderNode::element("img").attr("src", asset.url.clone());
    if !alt.is_empty() {
        node = node.attr("alt", alt.to_string());
    }
    if asset.width > 0 {
        node = node.attr("width", asset.width.to_string());
    }
    if asset.height > 0 {
        node = node.attr("height", asset.height.to_string());
    }
    node.build()
}

fn render_text(data: &TextData) -> RenderNode {
    RenderNode::element("div")
        .class("blk-text")
        .child(RenderNode::Raw(data.html.clone()))
        .build()
}

fn render_styled_text(data: &StyledTextData) -> RenderNode {
    let mut node = RenderNode::element("div")
        .class("blk-styled-text")
        .style("text-align", text_align_value(data.align));
    if !data.eyebrow.is_empty() {
        node = node.child(
            RenderNode::element("span")
                .class("eyebrow")
                .text(data.eyebrow.clone())
                .build(),
        );
    }
    if !data.heading.is_empty() {
        node = node.child(RenderNode::element("h2").text(data.heading.clone()).build());
    }
    node.child(RenderNode::Raw(data.html.clone())).build()
}

fn render_image(data: &ImageData) -> RenderNode {
    if data.asset.is_empty() {
        return placeholder("image");
    }
    let mut figure = RenderNode::element("figure").class("blk-image");
    if data.rounded {
        figure = figure.class("rounded");
    }
    let image = img(&data.asset, &data.alt);
    if data.link_url.is_empty() {
        figure = figure.child(image);
    } else {
        figure = figure.child(
            RenderNode::element("a")
                .attr("href", data.link_url.clone())
                .child(image)
                .build(),
        );
    }
    if !data.caption.is_empty() {
        figure = figure.child(
            RenderNode::element("figcaption")
                .text(data.caption.clone())
                .build(),
        );
    }
    figure.build()
}

fn render_image_card(data: &ImageCardData) -> RenderNode {
    let mut card = RenderNode::element("div")
        .class("blk-image-card")
        .style("text-align", text_align_value(data.align));
    if !data.asset.is_empty() {
        card = card.child(img(&data.asset, &data.heading));
    }
    let mut caption = RenderNode::element("div").class("image-card-caption");
    if !data.heading.is_empty() {
        caption = caption.child(RenderNode::element("h3").text(data.heading.clone()).build());
    }
    if !data.text.is_empty() {
        caption = caption.child(RenderNode::element("p").text(data.text.clone()).build());
    }
    card = card.child(caption.build());
    if data.link_url.is_empty() {
        card.build()
    } else {
        RenderNode::element("a")
            .attr("href", data.link_url.clone())
            .child(card.build())
            .build()
    }
}

fn render_gallery(data: &GalleryData) -> RenderNode {
    let mut grid = RenderNode::element("div")
        .class("blk-gallery")
        .style(
            "grid-template-columns",
            format!("repeat({}, 1fr)", data.columns.max(1)),
        )
        .style("gap", format!("{}px", data.gap_px));
    for asset in data.assets.iter().filter(|a| !a.is_empty()) {
        grid = grid.child(img(asset, ""));
    }
    grid.build()
}

fn render_hero_banner(data: &HeroBannerData) -> RenderNode {
    let mut content = RenderNode::element("div").class("hero-copy");
    if !data.heading.is_empty() {
        content = content.child(RenderNode::element("h1").text(data.heading.clone()).build());
    }
    if !data.subheading.is_empty() {
        content = content.child(RenderNode::element("p").text(data.subheading.clone()).build());
    }
    if !data.button_label.is_empty() {
        content = content.child(
            RenderNode::element("a")
                .class("btn")
                .class("btn-primary")
                .attr("href", data.button_url.clone())
                .text(data.button_label.clone())
                .build(),
        );
    }
    hero::hero_shell(
        &data.into(),
        ContentPosition::parse(&data.content_position),
        Some(data.min_height_px),
        content.build(),
    )
}

fn render_hero(data: &HeroData) -> RenderNode {
    let mut content = RenderNode::element("div").class("hero-copy");
    if !data.heading.is_empty() {
        content = content.child(RenderNode::element("h1").text(data.heading.clone()).build());
    }
    if !data.subheading.is_empty() {
        content = content.child(RenderNode::element("p").text(data.subheading.clone()).build());
    }
    hero::hero_shell(
        &data.into(),
        ContentPosition::parse(&data.content_position),
        None,
        content.build(),
    )
}

fn render_carousel(data: &CarouselData) -> RenderNode {
    let mut node = RenderNode::element("div")
        .class("blk-carousel")
        .attr("data-autoplay", data.autoplay.to_string())
        .attr("data-interval", data.interval_ms.to_string());
    for slide in &data.slides {
        let mut item = RenderNode::element("div").class("carousel-slide");
        if !slide.asset.is_empty() {
            item = item.child(img(&slide.asset, &slide.heading));
        }
        if !slide.heading.is_empty() {
            item = item.child(RenderNode::element("h3").text(slide.heading.clone()).build());
        }
        if !slide.text.is_empty() {
            item = item.child(RenderNode::element("p").text(slide.text.clone()).build());
        }
        node = node.child(item.build());
    }
    if data.show_dots && data.slides.len() > 1 {
        let mut dots = RenderNode::element("div").class("carousel-dots");
        for _ in &data.slides {
            dots = dots.child(RenderNode::element("button").class("carousel-dot").build());
        }
        node = node.child(dots.build());
    }
    node.build()
}

fn render_video(data: &VideoData) -> RenderNode {
    if data.url.is_empty() {
        return placeholder("video");
    }
    let mut video = RenderNode::element("video")
        .class("blk-video")
        .attr("src", data.url.clone());
    if !data.poster.is_empty() {
        video = video.attr("poster", data.poster.url.clone());
    }
    if data.autoplay {
        video = video.attr("autoplay", "");
    }
    if data.muted {
        video = video.attr("muted", "");
    }
    if data.looped {
        video = video.attr("loop", "");
    }
    if data.controls {
        video = video.attr("controls", "");
    }
    video.build()
}

fn render_button(data: &ButtonData) -> RenderNode {
    let mut node = RenderNode::element("a")
        .class("blk-button")
        .class(format!("btn-{}", data.variant))
        .attr("href", data.url.clone())
        .text(data.label.clone());
    if data.open_in_new_tab {
        node = node.attr("target", "_blank").attr("rel", "noopener");
    }
    node.build()
}

fn card_grid(class: &str, columns: u8) -> ElementNode {
    RenderNode::element("div").class(class).style(
        "grid-template-columns",
        format!("repeat({}, 1fr)", columns.max(1)),
    )
}

/// Item shell for a collection entry: item-level flags override the
/// block-level defaults, the stagger delay is keyed by sibling index.
fn item_shell(
    class: &str,
    item_effects: Option<&EffectFlags>,
    base: &EffectFlags,
    index: usize,
) -> ElementNode {
    let merged = item_effects
        .map(|own| own.merged_over(base))
        .unwrap_or_else(|| base.clone());
    apply_presentation(RenderNode::element("article").class(class), &compose(&merged, index))
}

fn render_cards(data: &CardsData, base: &EffectFlags) -> RenderNode {
    let mut grid = card_grid("blk-cards", data.columns)
        .style("text-align", text_align_value(data.align));
    for (index, item) in data.items.iter().enumerate() {
        grid = grid.child(render_card_item(item, base, index));
    }
    grid.build()
}

fn render_card_item(item: &CardItem, base: &EffectFlags, index: usize) -> RenderNode {
    let mut card = item_shell("card", item.effects.as_ref(), base, index);
    if !item.asset.is_empty() {
        card = card.child(img(&item.asset, &item.heading));
    }
    if !item.heading.is_empty() {
        card = card.child(RenderNode::element("h3").text(item.heading.clone()).build());
    }
    if !item.text.is_empty() {
        card = card.child(RenderNode::element("p").text(item.text.clone()).build());
    }
    if !item.link_url.is_empty() {
        card = card.child(
            RenderNode::element("a")
                .attr("href", item.link_url.clone())
                .text("Read more")
                .build(),
        );
    }
    card.build()
}

fn render_flip_cards(data: &FlipCardsData, base: &EffectFlags) -> RenderNode {
    let trigger = match data.trigger {
        FlipTrigger::Hover => "hover",
        FlipTrigger::Click => "click",
    };
    let mut grid = card_grid("blk-flip-cards", data.columns).attr("data-trigger", trigger);
    for (index, item) in data.items.iter().enumerate() {
        let mut card = item_shell("flip-card", item.effects.as_ref(), base, index);

        let mut front = RenderNode::element("div").class("flip-card-front");
        if !item.front_asset.is_empty() {
            front = front.child(img(&item.front_asset, &item.front_heading));
        }
        if !item.front_heading.is_empty() {
            front = front.child(
                RenderNode::element("h3")
                    .text(item.front_heading.clone())
                    .build(),
            );
        }

        let mut back = RenderNode::element("div").class("flip-card-back");
        if !item.back_heading.is_empty() {
            back = back.child(
                RenderNode::element("h3")
                    .text(item.back_heading.clone())
                    .build(),
            );
        }
        if !item.back_text.is_empty() {
            back = back.child(RenderNode::element("p").text(item.back_text.clone()).build());
        }
        if !item.back_link_url.is_empty() {
            back = back.child(
                RenderNode::element("a")
                    .attr("href", item.back_link_url.clone())
                    .text("Learn more")
                    .build(),
            );
        }

        card = card.child(front.build()).child(back.build());
        grid = grid.child(card.build());
    }
    grid.build()
}

fn render_text_cards(data: &TextCardsData, base: &EffectFlags) -> RenderNode {
    let mut grid = card_grid("blk-text-cards", data.columns)
        .style("text-align", text_align_value(data.align));
    for (index, item) in data.items.iter().enumerate() {
        let mut card = item_shell("text-card", item.effects.as_ref(), base, index);
        if !item.heading.is_empty() {
            card = card.child(RenderNode::element("h3").text(item.heading.clone()).build());
        }
        if !item.text.is_empty() {
            card = card.child(RenderNode::element("p").text(item.text.clone()).build());
        }
        grid = grid.child(card.build());
    }
    grid.build()
}

fn render_counter(data: &CounterData) -> RenderNode {
    let mut node = RenderNode::element("div")
        .class("blk-counter")
        .attr("data-target", data.target.to_string())
        .attr("data-duration", data.duration_ms.to_string());
    let mut value = RenderNode::element("span").class("counter-value");
    if !data.prefix.is_empty() {
        value = value.text(data.prefix.clone());
    }
    // Animation starts from zero when the block scrolls into view.
    value = value.child(RenderNode::element("span").class("counter-number").text("0").build());
    if !data.suffix.is_empty() {
        value = value.text(data.suffix.clone());
    }
    node = node.child(value.build());
    if !data.label.is_empty() {
        node = node.child(
            RenderNode::element("span")
                .class("counter-label")
                .text(data.label.clone())
                .build(),
        );
    }
    node.build()
}

fn render_testimonial(data: &TestimonialData) -> RenderNode {
    let mut node = RenderNode::element("figure").class("blk-testimonial");
    if data.rating > 0 {
        node = node.child(
            RenderNode::element("div")
                .class("testimonial-stars")
                .text("★".repeat(data.rating.min(5) as usize))
                .build(),
        );
    }
    node = node.child(
        RenderNode::element("blockquote")
            .text(data.quote.clone())
            .build(),
    );
    let mut caption = RenderNode::element("figcaption");
    if !data.avatar_url.is_empty() {
        caption = caption.child(
            RenderNode::element("img")
                .class("testimonial-avatar")
                .attr("src", data.avatar_url.clone())
                .attr("alt", data.author.clone())
                .build(),
        );
    }
    if !data.author.is_empty() {
        caption = caption.child(
            RenderNode::element("span")
                .class("testimonial-author")
                .text(data.author.clone())
                .build(),
        );
    }
    if !data.role.is_empty() {
        caption = caption.child(
            RenderNode::element("span")
                .class("testimonial-role")
                .text(data.role.clone())
                .build(),
        );
    }
    node.child(caption.build()).build()
}

fn render_accordion(data: &AccordionData) -> RenderNode {
    let mut node = RenderNode::element("div")
        .class("blk-accordion")
        .attr("data-exclusive", data.exclusive.to_string());
    for item in &data.items {
        let mut entry = RenderNode::element("details");
        if item.open_by_default {
            entry = entry.attr("open", "");
        }
        entry = entry
            .child(RenderNode::element("summary").text(item.title.clone()).build())
            .child(RenderNode::Raw(item.html.clone()));
        node = node.child(entry.build());
    }
    node.build()
}

fn render_icon_box(data: &IconBoxData) -> RenderNode {
    let mut node = RenderNode::element("div")
        .class("blk-icon-box")
        .style("text-align", text_align_value(data.align));
    if !data.icon.is_empty() {
        node = node.child(
            RenderNode::element("span")
                .class(format!("icon-{}", data.icon))
                .build(),
        );
    }
    if !data.heading.is_empty() {
        node = node.child(RenderNode::element("h3").text(data.heading.clone()).build());
    }
    if !data.text.is_empty() {
        node = node.child(RenderNode::element("p").text(data.text.clone()).build());
    }
    node.build()
}

fn render_quote(data: &QuoteData) -> RenderNode {
    let mut node = RenderNode::element("blockquote")
        .class("blk-quote")
        .text(data.text.clone());
    if !data.attribution.is_empty() {
        node = node.child(
            RenderNode::element("cite")
                .text(data.attribution.clone())
                .build(),
        );
    }
    node.build()
}

fn render_contact_form(data: &ContactFormData) -> RenderNode {
    let field = |name: &str, kind: &str| {
        RenderNode::element("input")
            .attr("name", name.to_string())
            .attr("type", kind.to_string())
            .build()
    };
    let mut form = RenderNode::element("form").class("blk-contact-form");
    if !data.heading.is_empty() {
        form = form.child(RenderNode::element("h3").text(data.heading.clone()).build());
    }
    form = form.child(field("name", "text")).child(field("email", "email"));
    if data.show_phone_field {
        form = form.child(field("phone", "tel"));
    }
    if data.show_subject_field {
        form = form.child(field("subject", "text"));
    }
    form.child(RenderNode::element("textarea").attr("name", "message").build())
        .child(
            RenderNode::element("button")
                .attr("type", "submit")
                .text(data.submit_label.clone())
                .build(),
        )
        .build()
}

fn render_company_info(data: &CompanyInfoData, company: &CompanyProfile) -> RenderNode {
    let mut list = RenderNode::element("dl").class("blk-company-info");
    let row = |list: ElementNode, label: &str, value: &str| {
        if value.is_empty() {
            return list;
        }
        list.child(RenderNode::element("dt").text(label.to_string()).build())
            .child(RenderNode::element("dd").text(value.to_string()).build())
    };
    if data.show_address {
        list = row(list, "Address", &company.address);
    }
    if data.show_phone {
        list = row(list, "Phone", &company.phone);
    }
    if data.show_email {
        list = row(list, "Email", &company.email);
    }
    if data.show_hours {
        list = row(list, "Hours", &company.hours);
    }
    list.build()
}

fn render_google_map(data: &GoogleMapData) -> RenderNode {
    if data.address.is_empty() {
        return placeholder("map");
    }
    let query: String = data
        .address
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    RenderNode::element("iframe")
        .class("blk-map")
        .style("height", format!("{}px", data.height_px))
        .attr(
            "src",
            format!(
                "https://www.google.com/maps?q={}&z={}&output=embed",
                query, data.zoom
            ),
        )
        .attr("loading", "lazy")
        .build()
}

fn render_spacer(data: &SpacerData) -> RenderNode {
    RenderNode::element("div")
        .class("blk-spacer")
        .style("height", format!("{}px", data.height_px))
        .build()
}

fn render_divider(data: &DividerData) -> RenderNode {
    RenderNode::element("hr")
        .class("blk-divider")
        .style("border-color", data.color.clone())
        .style("border-top-width", format!("{}px", data.thickness_px))
        .style("width", format!("{}%", data.width_pct))
        .build()
}

fn render_countdown(data: &CountdownData, now_epoch_ms: i64) -> RenderNode {
    let mut countdown = Countdown::new(data);
    match countdown.tick(now_epoch_ms) {
        CountdownTick::Running(left) => {
            let unit = |value: u64, label: &str| {
                let mut node = RenderNode::element("span")
                    .class("countdown-unit")
                    .child(
                        RenderNode::element("span")
                            .class("countdown-value")
                            .text(value.to_string())
                            .build(),
                    );
                if data.show_labels {
                    node = node.child(
                        RenderNode::element("span")
                            .class("countdown-label")
                            .text(label.to_string())
                            .build(),
                    );
                }
                node.build()
            };
            RenderNode::element("div")
                .class("blk-countdown")
                .attr("data-target", data.target_epoch_ms.to_string())
                .child(unit(left.days, "days"))
                .child(unit(left.hours, "hours"))
                .child(unit(left.minutes, "minutes"))
                .child(unit(left.seconds, "seconds"))
                .build()
        }
        CountdownTick::Expired(ExpiryAction::ShowMessage(message)) => {
            RenderNode::element("div")
                .class("blk-countdown")
                .class("countdown-expired")
                .text(message)
                .build()
        }
        CountdownTick::Expired(ExpiryAction::Hide) | CountdownTick::Finished => RenderNode::Empty,
        CountdownTick::Expired(ExpiryAction::Redirect(url)) => RenderNode::element("div")
            .class("blk-countdown")
            .class("countdown-expired")
            .attr("data-redirect", url)
            .build(),
    }
}

/// Neutral placeholder for blocks whose media has not been picked yet.
fn placeholder(kind: &str) -> RenderNode {
    RenderNode::element("div")
        .class("blk-placeholder")
        .class(format!("blk-placeholder-{kind}"))
        .build()
}
