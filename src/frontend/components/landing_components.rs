use bookshelf::landing::{Action, ActionVariant, Block, Region, RegionKind};
use leptos::prelude::*;
use thaw::*;

/// One colored landing region.
///
/// The welcome panel is an elevated surface, the two middle regions are thaw
/// cards and the footer is a plain centered strip.
#[component]
pub fn LandingRegion(region: Region) -> impl IntoView {
    let style = region.style.to_css();
    let blocks = region
        .blocks
        .iter()
        .map(|block| view! { <LandingBlock block=*block/> })
        .collect_view();

    match region.kind {
        RegionKind::Welcome => view! {
            <div class="landing-paper" style=style>
                {blocks}
            </div>
        }
        .into_any(),
        RegionKind::GetStarted | RegionKind::Features => view! {
            <Card attr:style=style>
                {blocks}
            </Card>
        }
        .into_any(),
        RegionKind::LearnMore => view! {
            <div class="landing-footer" style=style>
                {blocks}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn LandingBlock(block: Block) -> impl IntoView {
    match block {
        Block::Heading { level, text } => heading(level, text),
        Block::Paragraph { text } => view! { <p>{text}</p> }.into_any(),
        Block::List { items } => view! {
            <ul>
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        Block::Action(action) => view! { <ActionLink action/> }.into_any(),
    }
}

fn heading(level: u8, text: &'static str) -> AnyView {
    match level {
        1 => view! { <h1>{text}</h1> }.into_any(),
        2 => view! { <h2>{text}</h2> }.into_any(),
        3 => view! { <h3>{text}</h3> }.into_any(),
        4 => view! { <h4>{text}</h4> }.into_any(),
        5 => view! { <h5>{text}</h5> }.into_any(),
        _ => view! { <h6>{text}</h6> }.into_any(),
    }
}

/// Call-to-action: a single thaw button that navigates to `action.href`.
#[component]
fn ActionLink(action: Action) -> impl IntoView {
    let appearance = match action.variant {
        ActionVariant::Primary => ButtonAppearance::Primary,
        ActionVariant::Secondary => ButtonAppearance::Secondary,
    };
    let href = action.href;
    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    };

    view! {
        <Button appearance on_click>{action.label}</Button>
    }
}
