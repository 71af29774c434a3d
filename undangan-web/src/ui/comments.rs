use undangan_client::CommentNode;

use crate::{ui::card, Element, Html, RenderContext};

/// The `#comments` block of the page
#[derive(Clone, Debug, Default)]
pub struct CommentsContainer {
    loading: bool,
    content: Vec<Html>,
}

impl CommentsContainer {
    pub fn new() -> CommentsContainer {
        CommentsContainer::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replaces the content with one skeleton card per expected comment.
    ///
    /// Does nothing if the skeletons are already there.
    pub fn render_loading(&mut self, ctx: &RenderContext) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.content = (0..ctx.per_page).map(|_| skeleton(ctx)).collect();
    }

    /// Replaces the content with the rendered `roots`, ending any loading state
    pub fn show(&mut self, ctx: &RenderContext, roots: &[CommentNode]) {
        self.loading = false;
        self.content = roots.iter().map(|c| card::render(ctx, c)).collect();
    }

    pub fn to_html(&self) -> Html {
        Element::new("div")
            .id("comments")
            .attr("data-loading", self.loading.to_string())
            .children(self.content.iter().cloned())
            .into()
    }
}

fn placeholder(cols: &str) -> Html {
    Element::new("span")
        .class(format!("placeholder bg-secondary {cols} rounded-3"))
        .into()
}

fn skeleton(ctx: &RenderContext) -> Html {
    Element::new("div")
        .class(format!(
            "bg-theme-{} shadow p-3 mx-0 mt-0 mb-3 rounded-4",
            ctx.theme.surface()
        ))
        .child(
            Element::new("div")
                .class("d-flex flex-wrap justify-content-between align-items-center placeholder-wave")
                .child(placeholder("col-5 my-1"))
                .child(placeholder("col-3 my-1")),
        )
        .child(Element::new("hr").class(format!("text-{} my-1", ctx.theme.text())))
        .child(
            Element::new("p")
                .class("placeholder-wave m-0")
                .child(placeholder("col-6"))
                .child(placeholder("col-5"))
                .child(placeholder("col-12 my-1")),
        )
        .into()
}
