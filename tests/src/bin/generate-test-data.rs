use std::env;

use chrono::{Duration, Utc};
use komento_client::{
    api::{Comment, CommentId, QuestionId},
    encode, MAX_REPLY_DEPTH,
};
use rand::{seq::SliceRandom, Rng};

const NUM_COMMENTS: usize = 60;
const MAX_WORDS: usize = 40;
const REPLY_PROBABILITY: f64 = 0.6;
const EDIT_PROBABILITY: f64 = 0.2;
const MAX_VOTES: i64 = 12;

/// Comments are spread over the last month
const SPAN_MINUTES: i64 = 30 * 24 * 60;

fn main() -> anyhow::Result<()> {
    let question = QuestionId(match env::args().nth(1) {
        Some(q) => q.parse()?,
        None => 1,
    });
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let mut offsets = (0..NUM_COMMENTS)
        .map(|_| rng.gen_range(0..SPAN_MINUTES))
        .collect::<Vec<_>>();
    offsets.sort_unstable_by(|a, b| b.cmp(a));

    // (id, depth) of every comment generated so far, replies may only target these
    let mut parents: Vec<(CommentId, usize)> = Vec::new();
    let mut comments = Vec::with_capacity(NUM_COMMENTS);
    for minutes_ago in offsets {
        let created_at = now - Duration::minutes(minutes_ago);
        let parent = match rng.gen_bool(REPLY_PROBABILITY) {
            true => parents
                .iter()
                .filter(|(_, depth)| *depth < MAX_REPLY_DEPTH)
                .collect::<Vec<_>>()
                .choose(&mut rng)
                .map(|p| (**p).clone()),
            false => None,
        };
        let content = lipsum::lipsum_words(rng.gen_range(1..=MAX_WORDS));
        let mut c = Comment::new(
            CommentId::new(),
            question,
            parent.as_ref().map(|(id, _)| id.clone()),
            content,
            created_at,
        );
        if rng.gen_bool(EDIT_PROBABILITY) {
            let edited_ago = rng.gen_range(0..=minutes_ago);
            c.updated_at = now - Duration::minutes(edited_ago);
        }
        c.votes = rng.gen_range(-MAX_VOTES..=MAX_VOTES);
        parents.push((c.id.clone(), parent.map(|(_, d)| d + 1).unwrap_or(0)));
        comments.push(c);
    }

    eprintln!("{}", question.storage_key());
    println!("{}", encode(&comments)?);
    Ok(())
}
