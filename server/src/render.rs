//! Server-side rendering of the explore page

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;
use dioxus_ssr::Renderer;
use frameview_ui::{
    pages::{Explore, ExploreProps},
    theme::TABLE_CSS,
};

use crate::state::AppState;

/// Render the explore page for the configured frame
pub async fn explore_page(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!(title = %state.frame.title, "Rendering explore page");

    let frame = (*state.frame).clone();
    let page_title = frame.title.clone();

    let mut vdom = VirtualDom::new_with_props(Explore, ExploreProps { frame });
    vdom.rebuild_in_place();

    let mut renderer = Renderer::new();
    let html_body = renderer.render(&vdom);

    // Wrap in a full HTML document with the table stylesheet inlined
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{page_title}</title>
    <style>{TABLE_CSS}</style>
</head>
<body>
    <div id="main">
        {html_body}
    </div>
</body>
</html>"#
    );

    Html(html)
}
