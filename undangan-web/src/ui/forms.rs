use undangan_client::api::CommentId;

use crate::{Element, Html, RenderContext};

struct FormKind {
    icon: &'static str,
    label: &'static str,
    placeholder: &'static str,
    action: &'static str,
    action_label: &'static str,
}

const REPLY: FormKind = FormKind {
    icon: "fa-reply",
    label: "Reply",
    placeholder: "Type reply comment",
    action: "send",
    action_label: "Send",
};

const EDIT: FormKind = FormKind {
    icon: "fa-pen",
    label: "Edit",
    placeholder: "Type update comment",
    action: "update",
    action_label: "Update",
};

/// Inline form for answering comment `id`
pub fn reply_form(ctx: &RenderContext, id: &CommentId) -> Html {
    let textarea = textarea(id, &REPLY);
    form(ctx, id, &REPLY, None, textarea)
}

/// Inline form for editing comment `id`.
///
/// Top-level comments written by guests also get their presence edited.
pub fn edit_form(ctx: &RenderContext, id: &CommentId, presence: bool, is_root: bool) -> Html {
    let select = (is_root && !ctx.session.is_admin()).then(|| presence_select(ctx, id, presence));
    let textarea = textarea(id, &EDIT).attr("data-original", "");
    form(ctx, id, &EDIT, select, textarea)
}

fn form(
    ctx: &RenderContext,
    id: &CommentId,
    kind: &FormKind,
    select: Option<Element>,
    textarea: Element,
) -> Html {
    let label = Element::new("label")
        .attr("for", format!("form-inner-{id}"))
        .class("form-label")
        .attr("style", "font-size: 0.95rem;")
        .child(Element::new("i").class(format!("fa-solid {} me-1", kind.icon)))
        .text(kind.label);
    let outline = format!("btn btn-sm btn-outline-{} rounded-4 py-0", ctx.theme.text());
    Element::new("div")
        .class("my-2")
        .id(format!("inner-{id}"))
        .child(label)
        .children(select.map(Html::from))
        .child(textarea)
        .child(
            Element::new("div")
                .class("d-flex flex-wrap justify-content-end align-items-center mb-0")
                .child(button(id, "cancel", "Cancel").class(format!("{outline} me-1")))
                .child(button(id, kind.action, kind.action_label).class(outline)),
        )
        .into()
}

fn textarea(id: &CommentId, kind: &FormKind) -> Element {
    Element::new("textarea")
        .class("form-control shadow-sm rounded-4 mb-2")
        .id(format!("form-inner-{id}"))
        .attr("placeholder", kind.placeholder)
}

fn button(id: &CommentId, action: &'static str, label: &str) -> Element {
    Element::new("button")
        .attr("style", "font-size: 0.8rem;")
        .attr("data-action", action)
        .attr("data-uuid", id.to_string())
        .text(label)
}

fn presence_select(ctx: &RenderContext, id: &CommentId, presence: bool) -> Element {
    let option = |value: &'static str, label: &'static str, selected: bool| {
        let option = Element::new("option").attr("value", value);
        let option = match selected {
            true => option.attr("selected", ""),
            false => option,
        };
        option.text(label)
    };
    Element::new("select")
        .class("form-select shadow-sm mb-2 rounded-4")
        .id(format!("form-inner-presence-{id}"))
        .child(option("1", ctx.locale.attending(), presence))
        .child(option("2", ctx.locale.not_attending(), !presence))
}
