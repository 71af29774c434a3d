use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use undangan_web::{
    client::{
        api::{self, CommentId},
        CommentNode, Locale, MemoryStore, Theme,
    },
    ui::{self, CommentsContainer},
    Html, RenderContext, Settings,
};

#[derive(structopt::StructOpt)]
struct Opt {
    /// Render for the dark theme
    #[structopt(long)]
    dark: bool,

    /// Language of dates and presence labels (en, id)
    #[structopt(long, default_value = "en")]
    locale: Locale,

    /// JSON file mapping store namespaces (user, config, comment) to their contents
    #[structopt(long, parse(from_os_str))]
    state: Option<PathBuf>,

    /// Render as seen by the page owner
    #[structopt(long)]
    admin: bool,

    #[structopt(long, default_value = "10")]
    per_page: usize,

    /// Reference time for comment ages, RFC 3339 (defaults to now)
    #[structopt(long)]
    now: Option<String>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Render a JSON array of comments
    Render {
        #[structopt(parse(from_os_str))]
        comments: PathBuf,
    },

    /// Render the loading skeletons
    Loading,

    /// Render the reply form of a comment
    ReplyForm { id: String },

    /// Render the edit form of a comment
    EditForm {
        id: String,

        /// Current presence of the comment author
        #[structopt(long)]
        presence: bool,

        /// The comment is a top-level one
        #[structopt(long)]
        root: bool,
    },
}

fn load_store(path: Option<&Path>) -> anyhow::Result<MemoryStore> {
    let Some(path) = path else {
        return Ok(MemoryStore::new());
    };
    let doc = fs::read_to_string(path)
        .with_context(|| format!("reading state file {:?}", path))?;
    MemoryStore::from_json_str(&doc).with_context(|| format!("loading state file {:?}", path))
}

fn load_comments(path: &Path) -> anyhow::Result<Vec<CommentNode>> {
    let doc = fs::read_to_string(path)
        .with_context(|| format!("reading comments file {:?}", path))?;
    let comments: Vec<serde_json::Value> = serde_json::from_str(&doc)
        .with_context(|| format!("parsing comments file {:?}", path))?;
    Ok(CommentNode::decode_all(comments))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let store = load_store(opt.state.as_deref())?;
    let settings = Settings {
        theme: match opt.dark {
            true => Theme::Dark,
            false => Theme::Light,
        },
        locale: opt.locale,
        is_admin: opt.admin,
        per_page: opt.per_page,
    };
    let mut ctx = RenderContext::init(&store, settings);
    if let Some(now) = &opt.now {
        ctx = ctx.at(api::parse_time(now).context("parsing --now")?);
    }

    let html: Html = match opt.cmd {
        Command::Render { comments } => {
            let roots = load_comments(&comments)?;
            tracing::info!(count = roots.len(), "rendering comments");
            let mut container = CommentsContainer::new();
            container.show(&ctx, &roots);
            container.to_html()
        }
        Command::Loading => {
            let mut container = CommentsContainer::new();
            container.render_loading(&ctx);
            container.to_html()
        }
        Command::ReplyForm { id } => ui::reply_form(&ctx, &CommentId(id)),
        Command::EditForm { id, presence, root } => {
            ui::edit_form(&ctx, &CommentId(id), presence, root)
        }
    };
    println!("{html}");

    Ok(())
}
