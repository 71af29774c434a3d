use undangan_client::{escape_html, time_ago, transform, CommentNode};

use crate::{Element, Html, RenderContext};

/// Renders a top-level comment card with all its replies
pub fn render(ctx: &RenderContext, root: &CommentNode) -> Html {
    render_node(ctx, root, true)
}

pub fn render_reply(ctx: &RenderContext, reply: &CommentNode) -> Html {
    render_node(ctx, reply, false)
}

pub fn render_node(ctx: &RenderContext, c: &CommentNode, is_parent: bool) -> Html {
    let body = Element::new("div")
        .id(format!("body-content-{}", c.uuid))
        .attr("data-action", "like-tap")
        .attr("data-tap-time", "0")
        .attr("data-liked", "false")
        .children(body(ctx, c, is_parent));
    let mut node = header(ctx, c, is_parent)
        .id(c.uuid.to_string())
        .attr("style", "overflow-wrap: break-word !important;")
        .child(body);
    if !c.replies.is_empty() {
        node = node.child(read_more(ctx, c));
    }
    node.child(replies(ctx, c)).into()
}

fn header(ctx: &RenderContext, c: &CommentNode, is_parent: bool) -> Element {
    let surface = ctx.theme.surface();
    if is_parent {
        return Element::new("div")
            .class(format!(
                "bg-theme-{surface} shadow p-3 mx-0 mt-0 mb-3 rounded-4"
            ))
            .attr("data-parent", "true");
    }
    let hidden = match ctx.visibility.is_node_visible(&c.uuid) {
        true => "",
        false => "d-none ",
    };
    Element::new("div").class(format!(
        "{hidden}overflow-x-scroll mw-100 border-start bg-theme-{surface} py-2 ps-2 pe-0 my-2 ms-2 me-0"
    ))
}

fn title(ctx: &RenderContext, c: &CommentNode, is_parent: bool) -> Vec<Html> {
    if c.is_admin {
        let name = ctx.session.admin_name().unwrap_or_else(|| c.name.clone());
        return vec![
            Element::new("strong").class("me-1").text(name).into(),
            Element::new("i")
                .class("fa-solid fa-certificate text-primary")
                .into(),
        ];
    }
    if is_parent {
        let icon = match c.presence {
            true => "fa-circle-check text-success",
            false => "fa-circle-xmark text-danger",
        };
        return vec![
            Element::new("strong").class("me-1").text(&c.name).into(),
            Element::new("i")
                .id(format!("badge-{}", c.uuid))
                .class(format!("fa-solid {icon}"))
                .into(),
        ];
    }
    vec![Element::new("strong").text(&c.name).into()]
}

fn body(ctx: &RenderContext, c: &CommentNode, is_parent: bool) -> Vec<Html> {
    let text = ctx.theme.text();
    let top = Element::new("div")
        .class("d-flex flex-wrap justify-content-between align-items-center")
        .child(
            Element::new("p")
                .class(format!("text-{text} text-truncate m-0 p-0"))
                .children(title(ctx, c, is_parent)),
        )
        .child(
            Element::new("small")
                .class(format!("text-{text} m-0 p-0"))
                .attr("style", "font-size: 0.75rem;")
                .text(time_ago(&c.created_at, ctx.now, ctx.locale)),
        );
    let content = Element::new("p")
        .class(format!("text-{text} mt-0 mb-1 mx-0 p-0"))
        .attr(
            "style",
            "white-space: pre-wrap !important; font-size: 0.95rem;",
        )
        .id(format!("content-{}", c.uuid))
        .child(Html::raw(transform(&escape_html(&c.comment), ctx.theme)));
    vec![
        top.into(),
        Element::new("hr").class(format!("text-{text} my-1")).into(),
        content.into(),
    ]
}

fn replies(ctx: &RenderContext, c: &CommentNode) -> Element {
    Element::new("div")
        .id(format!("reply-content-{}", c.uuid))
        .children(c.replies.iter().map(|r| render_reply(ctx, r)))
}

/// Link toggling the replies of `c`, for the host page to wire up
pub fn read_more(ctx: &RenderContext, c: &CommentNode) -> Html {
    let expanded = ctx.visibility.is_expanded(&c.uuid);
    let label = match expanded {
        true => String::from("Hide replies"),
        false => format!("Show replies ({})", c.replies.len()),
    };
    let uuids = c.reply_ids().map(|id| id.as_str()).collect::<Vec<_>>();
    Element::new("a")
        .attr("style", "font-size: 0.8rem;")
        .attr("data-action", "show-or-hide")
        .attr("data-uuid", c.uuid.to_string())
        .attr("data-uuids", uuids.join(","))
        .attr("data-show", expanded.to_string())
        .attr("role", "button")
        .class("me-auto ms-1 py-0")
        .text(label)
        .into()
}
