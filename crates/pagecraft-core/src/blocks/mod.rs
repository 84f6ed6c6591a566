//! Block payload definitions for the structured document.
//!
//! A block is a tagged union over its `type` string; each type owns a
//! payload struct whose fields are all defaulted, so a payload read from a
//! persisted document never fails on a missing field.

mod cards;
mod content;
mod dynamic;
mod hero;
mod media;

pub use cards::{
    CardItem, CardsData, FlipCardItem, FlipCardsData, FlipTrigger, TextCardItem, TextCardsData,
};
pub use content::{
    AccordionData, AccordionItem, ButtonData, DividerData, HtmlData, IconBoxData, QuoteData,
    SpacerData, StyledTextData, TestimonialData, TextAlign, TextData,
};
pub use dynamic::{
    CompanyInfoData, ContactFormData, CounterData, CountdownData, ExpiryPolicy, GoogleMapData,
};
pub use hero::{
    BackgroundKind, ContentPosition, GradientData, HeroBannerData, HeroData, HorizontalPos,
    OverlayData, VerticalPos,
};
pub use media::{
    CarouselData, CarouselSlide, GalleryData, ImageCardData, ImageData, MediaRef, VideoData,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The set of known block types. Creating a block takes one of these;
/// loading a document may additionally produce [`BlockData::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    Text,
    StyledText,
    Image,
    ImageCard,
    Gallery,
    HeroBanner,
    Hero,
    Carousel,
    Video,
    Button,
    Cards,
    FlipCards,
    TextCards,
    Counter,
    Testimonial,
    Accordion,
    IconBox,
    Quote,
    ContactForm,
    CompanyInfo,
    GoogleMap,
    Spacer,
    Divider,
    Html,
    Countdown,
}

impl BlockType {
    /// The wire name used in the persisted `type` field.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::StyledText => "styledText",
            BlockType::Image => "image",
            BlockType::ImageCard => "imageCard",
            BlockType::Gallery => "gallery",
            BlockType::HeroBanner => "heroBanner",
            BlockType::Hero => "hero",
            BlockType::Carousel => "carousel",
            BlockType::Video => "video",
            BlockType::Button => "button",
            BlockType::Cards => "cards",
            BlockType::FlipCards => "flipCards",
            BlockType::TextCards => "textCards",
            BlockType::Counter => "counter",
            BlockType::Testimonial => "testimonial",
            BlockType::Accordion => "accordion",
            BlockType::IconBox => "iconBox",
            BlockType::Quote => "quote",
            BlockType::ContactForm => "contactForm",
            BlockType::CompanyInfo => "companyInfo",
            BlockType::GoogleMap => "googleMap",
            BlockType::Spacer => "spacer",
            BlockType::Divider => "divider",
            BlockType::Html => "html",
            BlockType::Countdown => "countdown",
        }
    }

    /// True for media-bearing types. Drives the responsive mobile ordering
    /// of columns (a column "hasImage" if any block is a media type).
    pub fn is_media(self) -> bool {
        matches!(
            self,
            BlockType::Image
                | BlockType::ImageCard
                | BlockType::Gallery
                | BlockType::Carousel
                | BlockType::Video
                | BlockType::HeroBanner
                | BlockType::Hero
        )
    }

    /// True for types that force a single-column row to full viewport
    /// width, bypassing the content-width container.
    pub fn is_full_bleed(self) -> bool {
        matches!(self, BlockType::Hero | BlockType::HeroBanner | BlockType::Video)
    }
}

/// Type-specific payload of a block. One variant per known type, plus
/// `Unknown` for types this build does not recognize; unknown payloads keep
/// their raw value so a load/save round trip is lossless.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    Text(TextData),
    StyledText(StyledTextData),
    Image(ImageData),
    ImageCard(ImageCardData),
    Gallery(GalleryData),
    HeroBanner(HeroBannerData),
    Hero(HeroData),
    Carousel(CarouselData),
    Video(VideoData),
    Button(ButtonData),
    Cards(CardsData),
    FlipCards(FlipCardsData),
    TextCards(TextCardsData),
    Counter(CounterData),
    Testimonial(TestimonialData),
    Accordion(AccordionData),
    IconBox(IconBoxData),
    Quote(QuoteData),
    ContactForm(ContactFormData),
    CompanyInfo(CompanyInfoData),
    GoogleMap(GoogleMapData),
    Spacer(SpacerData),
    Divider(DividerData),
    Html(HtmlData),
    Countdown(CountdownData),
    /// Unrecognized type: raw tag and payload preserved verbatim.
    Unknown { type_name: String, raw: Value },
}

impl BlockData {
    /// Default payload for a known type (the `createBlock` table).
    pub fn default_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Text => BlockData::Text(TextData::default()),
            BlockType::StyledText => BlockData::StyledText(StyledTextData::default()),
            BlockType::Image => BlockData::Image(ImageData::default()),
            BlockType::ImageCard => BlockData::ImageCard(ImageCardData::default()),
            BlockType::Gallery => BlockData::Gallery(GalleryData::default()),
            BlockType::HeroBanner => BlockData::HeroBanner(HeroBannerData::default()),
            BlockType::Hero => BlockData::Hero(HeroData::default()),
            BlockType::Carousel => BlockData::Carousel(CarouselData::default()),
            BlockType::Video => BlockData::Video(VideoData::default()),
            BlockType::Button => BlockData::Button(ButtonData::default()),
            BlockType::Cards => BlockData::Cards(CardsData::default()),
            BlockType::FlipCards => BlockData::FlipCards(FlipCardsData::default()),
            BlockType::TextCards => BlockData::TextCards(TextCardsData::default()),
            BlockType::Counter => BlockData::Counter(CounterData::default()),
            BlockType::Testimonial => BlockData::Testimonial(TestimonialData::default()),
            BlockType::Accordion => BlockData::Accordion(AccordionData::default()),
            BlockType::IconBox => BlockData::IconBox(IconBoxData::default()),
            BlockType::Quote => BlockData::Quote(QuoteData::default()),
            BlockType::ContactForm => BlockData::ContactForm(ContactFormData::default()),
            BlockType::CompanyInfo => BlockData::CompanyInfo(CompanyInfoData::default()),
            BlockType::GoogleMap => BlockData::GoogleMap(GoogleMapData::default()),
            BlockType::Spacer => BlockData::Spacer(SpacerData::default()),
            BlockType::Divider => BlockData::Divider(DividerData::default()),
            BlockType::Html => BlockData::Html(HtmlData::default()),
            BlockType::Countdown => BlockData::Countdown(CountdownData::default()),
        }
    }

    /// The known type of this payload, `None` for `Unknown`.
    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            BlockData::Text(_) => Some(BlockType::Text),
            BlockData::StyledText(_) => Some(BlockType::StyledText),
            BlockData::Image(_) => Some(BlockType::Image),
            BlockData::ImageCard(_) => Some(BlockType::ImageCard),
            BlockData::Gallery(_) => Some(BlockType::Gallery),
            BlockData::HeroBanner(_) => Some(BlockType::HeroBanner),
            BlockData::Hero(_) => Some(BlockType::Hero),
            BlockData::Carousel(_) => Some(BlockType::Carousel),
            BlockData::Video(_) => Some(BlockType::Video),
            BlockData::Button(_) => Some(BlockType::Button),
            BlockData::Cards(_) => Some(BlockType::Cards),
            BlockData::FlipCards(_) => Some(BlockType::FlipCards),
            BlockData::TextCards(_) => Some(BlockType::TextCards),
            BlockData::Counter(_) => Some(BlockType::Counter),
            BlockData::Testimonial(_) => Some(BlockType::Testimonial),
            BlockData::Accordion(_) => Some(BlockType::Accordion),
            BlockData::IconBox(_) => Some(BlockType::IconBox),
            BlockData::Quote(_) => Some(BlockType::Quote),
            BlockData::ContactForm(_) => Some(BlockType::ContactForm),
            BlockData::CompanyInfo(_) => Some(BlockType::CompanyInfo),
            BlockData::GoogleMap(_) => Some(BlockType::GoogleMap),
            BlockData::Spacer(_) => Some(BlockType::Spacer),
            BlockData::Divider(_) => Some(BlockType::Divider),
            BlockData::Html(_) => Some(BlockType::Html),
            BlockData::Countdown(_) => Some(BlockType::Countdown),
            BlockData::Unknown { .. } => None,
        }
    }

    /// The wire name this payload serializes under.
    pub fn type_name(&self) -> &str {
        match self {
            BlockData::Unknown { type_name, .. } => type_name,
            other => other
                .block_type()
                .map(BlockType::name)
                .unwrap_or("unknown"),
        }
    }

    /// True for media-bearing payloads (unknown types are not media).
    pub fn is_media(&self) -> bool {
        self.block_type().is_some_and(BlockType::is_media)
    }

    /// True for full-bleed payloads.
    pub fn is_full_bleed(&self) -> bool {
        self.block_type().is_some_and(BlockType::is_full_bleed)
    }

    /// Interpret a wire `type`/`data` pair. A recognized type with a
    /// payload that fails to parse falls back to the type's defaults
    /// (absence never throws); an unrecognized type is preserved raw.
    pub fn from_wire(type_name: &str, data: Value) -> Self {
        fn parse<T: Default + for<'de> Deserialize<'de>>(value: Value) -> T {
            serde_json::from_value(value).unwrap_or_else(|err| {
                log::warn!("block payload did not parse, using defaults: {err}");
                T::default()
            })
        }

        match type_name {
            "text" => BlockData::Text(parse(data)),
            "styledText" => BlockData::StyledText(parse(data)),
            "image" => BlockData::Image(parse(data)),
            "imageCard" => BlockData::ImageCard(parse(data)),
            "gallery" => BlockData::Gallery(parse(data)),
            "heroBanner" => BlockData::HeroBanner(parse(data)),
            "hero" => BlockData::Hero(parse(data)),
            "carousel" => BlockData::Carousel(parse(data)),
            "video" => BlockData::Video(parse(data)),
            "button" => BlockData::Button(parse(data)),
            "cards" => BlockData::Cards(parse(data)),
            "flipCards" => BlockData::FlipCards(parse(data)),
            "textCards" => BlockData::TextCards(parse(data)),
            "counter" => BlockData::Counter(parse(data)),
            "testimonial" => BlockData::Testimonial(parse(data)),
            "accordion" => BlockData::Accordion(parse(data)),
            "iconBox" => BlockData::IconBox(parse(data)),
            "quote" => BlockData::Quote(parse(data)),
            "contactForm" => BlockData::ContactForm(parse(data)),
            "companyInfo" => BlockData::CompanyInfo(parse(data)),
            "googleMap" => BlockData::GoogleMap(parse(data)),
            "spacer" => BlockData::Spacer(parse(data)),
            "divider" => BlockData::Divider(parse(data)),
            "html" => BlockData::Html(parse(data)),
            "countdown" => BlockData::Countdown(parse(data)),
            other => BlockData::Unknown {
                type_name: other.to_string(),
                raw: data,
            },
        }
    }

    /// Serialize the payload to its wire `data` value.
    pub fn to_wire(&self) -> Value {
        fn emit<T: Serialize>(payload: &T) -> Value {
            serde_json::to_value(payload).unwrap_or(Value::Null)
        }

        match self {
            BlockData::Text(d) => emit(d),
            BlockData::StyledText(d) => emit(d),
            BlockData::Image(d) => emit(d),
            BlockData::ImageCard(d) => emit(d),
            BlockData::Gallery(d) => emit(d),
            BlockData::HeroBanner(d) => emit(d),
            BlockData::Hero(d) => emit(d),
            BlockData::Carousel(d) => emit(d),
            BlockData::Video(d) => emit(d),
            BlockData::Button(d) => emit(d),
            BlockData::Cards(d) => emit(d),
            BlockData::FlipCards(d) => emit(d),
            BlockData::TextCards(d) => emit(d),
            BlockData::Counter(d) => emit(d),
            BlockData::Testimonial(d) => emit(d),
            BlockData::Accordion(d) => emit(d),
            BlockData::IconBox(d) => emit(d),
            BlockData::Quote(d) => emit(d),
            BlockData::ContactForm(d) => emit(d),
            BlockData::CompanyInfo(d) => emit(d),
            BlockData::GoogleMap(d) => emit(d),
            BlockData::Spacer(d) => emit(d),
            BlockData::Divider(d) => emit(d),
            BlockData::Html(d) => emit(d),
            BlockData::Countdown(d) => emit(d),
            BlockData::Unknown { raw, .. } => raw.clone(),
        }
    }
}
