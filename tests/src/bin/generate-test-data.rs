use anyhow::Context;
use chrono::{Duration, Utc};
use rand::{seq::SliceRandom, Rng};
use undangan_api::{Comment, CommentId, RawReplies, Time};

const NUM_ROOTS: usize = 20;
const MAX_DEPTH: usize = 4;
const MAX_REPLIES: usize = 3;

// Roots are spread over the last 90 days
const MAX_AGE_SECS: i64 = 90 * 86_400;

const COMMENT_MIN_WORDS: usize = 3;
const COMMENT_MAX_WORDS: usize = 40;

const NAMES: [&str; 8] = [
    "Ayu", "Budi", "Citra", "Dewi", "Eko", "Fajar", "Gita", "Hadi",
];
const DELIMITERS: [&str; 4] = ["*", "_", "~", "```"];

fn gen_text(rng: &mut impl Rng) -> String {
    let words = lipsum::lipsum_words(rng.gen_range(COMMENT_MIN_WORDS..=COMMENT_MAX_WORDS));
    let mut words = words.split(' ').map(String::from).collect::<Vec<_>>();
    // sprinkle some markup, and sometimes things that must not be taken as markup
    for _ in 0..rng.gen_range(0..3) {
        let i = rng.gen_range(0..words.len());
        let d = DELIMITERS.choose(rng).copied().unwrap_or("*");
        words[i] = format!("{d}{}{d}", words[i]);
    }
    if rng.gen_bool(0.1) {
        words.push(String::from("<script>alert('hi')</script>"));
    }
    if rng.gen_bool(0.1) {
        words.push(String::from("2 * 3 * 4"));
    }
    words.join(" ")
}

fn gen_comment(rng: &mut impl Rng, created_at: Time, depth: usize) -> anyhow::Result<Comment> {
    let num_replies = match depth < MAX_DEPTH {
        true => rng.gen_range(0..=MAX_REPLIES),
        false => 0,
    };
    let mut replies = Vec::with_capacity(num_replies);
    let mut reply_date = created_at;
    for _ in 0..num_replies {
        reply_date = reply_date + Duration::seconds(rng.gen_range(1..=86_400));
        replies.push(gen_comment(rng, reply_date, depth + 1)?);
    }
    let replies = serde_json::to_string(&replies).context("serializing replies")?;

    Ok(Comment {
        uuid: CommentId(uuid::Uuid::new_v4().to_string()),
        name: NAMES.choose(rng).copied().unwrap_or("Anon").to_string(),
        comment: gen_text(rng),
        created_at: created_at.to_rfc3339(),
        is_admin: rng.gen_bool(0.05),
        presence: depth == 0 && rng.gen_bool(0.7),
        comments: Some(RawReplies::Encoded(replies)),
    })
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let mut roots = Vec::with_capacity(NUM_ROOTS);
    for _ in 0..NUM_ROOTS {
        let date = now - Duration::seconds(rng.gen_range(0..MAX_AGE_SECS));
        roots.push(gen_comment(&mut rng, date, 0)?);
    }
    // newest first, like the server pages them
    roots.sort_unstable_by(|a, b| b.created_at.cmp(&a.created_at));
    println!(
        "{}",
        serde_json::to_string_pretty(&roots).context("serializing comments")?
    );
    Ok(())
}
