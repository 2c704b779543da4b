//! Framework-neutral description of the landing view.
//!
//! The content is fixed; only the background of each region changes between
//! renders. Every region draws its own color, so two regions may or may not
//! share one.

use rand::Rng;

use super::palette::{Color, MACARONS};

/// Destination of the "add a book" call-to-action.
pub const ADD_BOOK_PATH: &str = "/add-book";
/// Destination of the footer call-to-action.
pub const ABOUT_PATH: &str = "/about";

/// The four landing regions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Welcome,
    GetStarted,
    Features,
    LearnMore,
}

impl RegionKind {
    pub fn all() -> &'static [RegionKind] {
        &[
            RegionKind::Welcome,
            RegionKind::GetStarted,
            RegionKind::Features,
            RegionKind::LearnMore,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionVariant {
    /// Filled button
    Primary,
    /// Outlined button
    Secondary,
}

/// A link-style control pointing at a route owned by the host router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub href: &'static str,
    pub variant: ActionVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: &'static str },
    Paragraph { text: &'static str },
    List { items: &'static [&'static str] },
    Action(Action),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Inline style of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub background: Color,
    pub padding_px: Option<u16>,
    pub margin_top_px: Option<u16>,
    pub margin_bottom_px: Option<u16>,
    pub text_align: Option<TextAlign>,
}

impl Style {
    fn plain(background: Color) -> Self {
        Self {
            background,
            padding_px: None,
            margin_top_px: None,
            margin_bottom_px: None,
            text_align: None,
        }
    }

    /// Render as the value of an HTML `style` attribute.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::with_capacity(5);
        if let Some(px) = self.padding_px {
            decls.push(format!("padding: {px}px"));
        }
        if let Some(px) = self.margin_top_px {
            decls.push(format!("margin-top: {px}px"));
        }
        if let Some(px) = self.margin_bottom_px {
            decls.push(format!("margin-bottom: {px}px"));
        }
        if let Some(align) = self.text_align {
            let value = match align {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
            };
            decls.push(format!("text-align: {value}"));
        }
        decls.push(format!("background: {}", self.background));
        decls.join("; ")
    }
}

/// One colored block of the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub style: Style,
    pub blocks: &'static [Block],
}

impl Region {
    pub fn background(&self) -> Color {
        self.style.background
    }

    pub fn actions(&self) -> impl Iterator<Item = &'static Action> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Action(action) => Some(action),
            _ => None,
        })
    }
}

const WELCOME: &[Block] = &[
    Block::Heading {
        level: 1,
        text: "Welcome! MY",
    },
    Block::Heading {
        level: 6,
        text: "刷新有惊喜～",
    },
    Block::Paragraph {
        text: "Your personal book collection management system.",
    },
];

const GET_STARTED: &[Block] = &[
    Block::Heading {
        level: 2,
        text: "Get Started",
    },
    Block::Action(Action {
        label: "Add a New Book",
        href: ADD_BOOK_PATH,
        variant: ActionVariant::Primary,
    }),
];

pub const FEATURES: &[&str] = &[
    "Manage your book collection",
    "Track reading progress",
    "Share your collection with friends",
];

const FEATURE_BLOCKS: &[Block] = &[
    Block::Heading {
        level: 2,
        text: "Features",
    },
    Block::List { items: FEATURES },
];

const LEARN_MORE: &[Block] = &[Block::Action(Action {
    label: "Learn More About Us",
    href: ABOUT_PATH,
    variant: ActionVariant::Secondary,
})];

/// The landing view produced by one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub regions: [Region; 4],
}

impl LandingPage {
    /// Render with the thread-local RNG.
    pub fn render() -> Self {
        Self::render_with(&mut rand::rng())
    }

    /// Render drawing one background per region from `rng`.
    pub fn render_with<R: Rng>(rng: &mut R) -> Self {
        let welcome = Style {
            padding_px: Some(20),
            margin_bottom_px: Some(20),
            ..Style::plain(MACARONS.pick(rng))
        };
        let get_started = Style {
            padding_px: Some(20),
            margin_bottom_px: Some(20),
            ..Style::plain(MACARONS.pick(rng))
        };
        let features = Style {
            padding_px: Some(20),
            ..Style::plain(MACARONS.pick(rng))
        };
        let learn_more = Style {
            margin_top_px: Some(20),
            text_align: Some(TextAlign::Center),
            ..Style::plain(MACARONS.pick(rng))
        };

        Self {
            regions: [
                Region {
                    kind: RegionKind::Welcome,
                    style: welcome,
                    blocks: WELCOME,
                },
                Region {
                    kind: RegionKind::GetStarted,
                    style: get_started,
                    blocks: GET_STARTED,
                },
                Region {
                    kind: RegionKind::Features,
                    style: features,
                    blocks: FEATURE_BLOCKS,
                },
                Region {
                    kind: RegionKind::LearnMore,
                    style: learn_more,
                    blocks: LEARN_MORE,
                },
            ],
        }
    }

    pub fn region(&self, kind: RegionKind) -> &Region {
        &self.regions[kind as usize]
    }

    /// Every call-to-action on the page, top to bottom.
    pub fn actions(&self) -> impl Iterator<Item = &'static Action> + '_ {
        self.regions.iter().flat_map(|region| region.actions())
    }

    pub fn colors(&self) -> [Color; 4] {
        self.regions.map(|region| region.background())
    }
}
