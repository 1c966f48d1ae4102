use std::path::PathBuf;

use anyhow::{anyhow, Context};
use komento_client::{
    api::{CommentId, QuestionId, SortOrder, VoteDirection},
    can_reply, CommentNode, CommentStore,
};

mod dir;
use dir::DirBackend;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Directory holding the stored comments
    #[structopt(long, env = "KOMENTO_DATA_DIR", default_value = ".komento")]
    data_dir: PathBuf,

    /// Question whose comments to act on
    #[structopt(short, long)]
    question: Option<u64>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// List the questions that have comments
    List,

    /// Show the comment tree of a question
    Show {
        /// newest, oldest or most-voted
        #[structopt(short, long, default_value = "newest")]
        sort: SortOrder,
    },

    /// Post a top-level comment
    Add { content: String },

    /// Reply to a comment
    Reply { parent: CommentId, content: String },

    /// Replace the content of a comment
    Edit { id: CommentId, content: String },

    /// Delete a comment along with all its replies
    Delete { id: CommentId },

    /// Vote a comment up or down
    Vote { id: CommentId, direction: VoteDirection },
}

fn print_tree(store: &CommentStore<DirBackend>, sort: SortOrder) {
    let forest = store.tree(sort);
    println!("Comments ({})", store.len());
    if forest.is_empty() {
        println!("No comments yet.");
        return;
    }
    for (depth, n) in CommentNode::walk(&forest) {
        let c = &n.comment;
        let indent = "  ".repeat(depth);
        println!(
            "{indent}[{}] {} · {} · {:+} votes{}{}",
            c.id,
            c.author,
            c.created_at.format("%Y-%m-%d %H:%M:%S"),
            c.votes,
            if c.is_edited() { " (edited)" } else { "" },
            if can_reply(depth) { "" } else { " · no further replies" },
        );
        for line in c.content.lines() {
            println!("{indent}  {line}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();
    let backend = DirBackend::open(&opt.data_dir)
        .with_context(|| format!("opening data directory {:?}", opt.data_dir))?;

    if let Command::List = opt.cmd {
        for q in backend.questions().context("listing stored questions")? {
            println!("{q}");
        }
        return Ok(());
    }

    let question = QuestionId(
        opt.question
            .ok_or_else(|| anyhow!("--question is required for this command"))?,
    );
    let mut store = CommentStore::open(backend, question)
        .with_context(|| format!("loading comments of question {question}"))?;

    match opt.cmd {
        Command::List => unreachable!(),
        Command::Show { sort } => print_tree(&store, sort),
        Command::Add { content } => match store.add(&content)? {
            Some(id) => println!("{id}"),
            None => eprintln!("Not posting an empty comment"),
        },
        Command::Reply { parent, content } => {
            let depth = CommentNode::walk(&store.tree(SortOrder::default()))
                .find(|(_, n)| n.comment.id == parent)
                .map(|(depth, _)| depth);
            match depth {
                None => return Err(anyhow!("no comment {parent} on question {question}")),
                Some(d) if !can_reply(d) => {
                    return Err(anyhow!("comment {parent} is nested too deeply to be replied to"))
                }
                Some(_) => (),
            }
            match store.reply(parent, &content)? {
                Some(id) => println!("{id}"),
                None => eprintln!("Not posting an empty reply"),
            }
        }
        Command::Edit { id, content } => {
            if !store.edit(id, &content)? {
                eprintln!("Nothing edited: unknown comment or empty content");
            }
        }
        Command::Delete { id } => {
            let removed = store.delete(id)?;
            println!("Deleted {removed} comment(s)");
        }
        Command::Vote { id, direction } => match store.vote(id.clone(), direction)? {
            Some(_) => println!("{}", store.get(&id).map(|c| c.votes).unwrap_or_default()),
            None => eprintln!("No comment {id} on question {question}"),
        },
    }

    Ok(())
}
