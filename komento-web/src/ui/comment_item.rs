use std::{collections::HashMap, rc::Rc};

use komento_client::{
    api::{CommentId, VoteDirection, VoteState},
    can_reply, CommentNode,
};
use yew::prelude::*;

use crate::util;

#[derive(Clone, Debug, PartialEq)]
pub enum CommentAction {
    Add {
        parent: Option<CommentId>,
        content: String,
    },
    Edit(CommentId, String),
    Delete(CommentId),
    Vote(CommentId, VoteDirection),
}

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub node: CommentNode,
    pub depth: usize,
    pub votes: Rc<HashMap<CommentId, VoteState>>,
    pub on_action: Callback<CommentAction>,
}

fn textarea_value(e: InputEvent) -> String {
    let elt: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
    elt.value()
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let editing = use_state(|| None::<String>);
    let replying = use_state(|| None::<String>);
    let confirm_delete = use_state(|| false);

    let c = &p.node.comment;
    let vote = p.votes.get(&c.id).copied().unwrap_or_default();
    let show_reply = can_reply(p.depth) && editing.is_none();

    let body = match (*editing).clone() {
        None => html! { <p class="comment-content">{ &c.content }</p> },
        Some(draft) => {
            let on_save = {
                let editing = editing.clone();
                let id = c.id.clone();
                let draft = draft.clone();
                p.on_action.reform(move |_: MouseEvent| {
                    editing.set(None);
                    CommentAction::Edit(id.clone(), draft.clone())
                })
            };
            let on_cancel = {
                let editing = editing.clone();
                Callback::from(move |_: MouseEvent| editing.set(None))
            };
            let on_input = {
                let editing = editing.clone();
                Callback::from(move |e: InputEvent| editing.set(Some(textarea_value(e))))
            };
            html! {
                <div class="comment-edit">
                    <textarea class="form-control" value={ draft.clone() } oninput={ on_input } />
                    <button
                        class="btn btn-sm btn-primary"
                        disabled={ draft.trim().is_empty() }
                        onclick={ on_save }
                    >
                        { "Save" }
                    </button>
                    <button class="btn btn-sm btn-outline-secondary" onclick={ on_cancel }>
                        { "Cancel" }
                    </button>
                </div>
            }
        }
    };

    let vote_button = |dir: VoteDirection| {
        let (icon, active, label) = match dir {
            VoteDirection::Up => ("bi-hand-thumbs-up", vote == VoteState::Up, "Upvote"),
            VoteDirection::Down => ("bi-hand-thumbs-down", vote == VoteState::Down, "Downvote"),
        };
        let id = c.id.clone();
        html! {
            <button
                type="button"
                class={ classes!("btn", "btn-sm", "bi-btn", icon, active.then(|| "voted")) }
                aria-label={ label }
                aria-pressed={ if active { "true" } else { "false" } }
                onclick={ p.on_action.reform(move |_: MouseEvent| CommentAction::Vote(id.clone(), dir)) }
            >
            </button>
        }
    };

    let actions = editing.is_none().then(|| {
        let on_reply = {
            let replying = replying.clone();
            Callback::from(move |_: MouseEvent| {
                replying.set(match *replying {
                    None => Some(String::new()),
                    Some(_) => None,
                })
            })
        };
        let on_edit = {
            let editing = editing.clone();
            let content = c.content.clone();
            Callback::from(move |_: MouseEvent| editing.set(Some(content.clone())))
        };
        let on_delete = {
            let confirm_delete = confirm_delete.clone();
            Callback::from(move |_: MouseEvent| confirm_delete.set(true))
        };
        html! {
            <>
                { for show_reply.then(|| html! {
                    <button class="btn btn-sm btn-link" onclick={ on_reply }>{ "Reply" }</button>
                }) }
                <button class="btn btn-sm btn-link" onclick={ on_edit }>{ "Edit" }</button>
                <button class="btn btn-sm btn-link text-danger" onclick={ on_delete }>
                    { "Delete" }
                </button>
            </>
        }
    });

    let delete_confirmation = (*confirm_delete).then(|| {
        let on_confirm = {
            let confirm_delete = confirm_delete.clone();
            let id = c.id.clone();
            p.on_action.reform(move |_: MouseEvent| {
                confirm_delete.set(false);
                CommentAction::Delete(id.clone())
            })
        };
        let on_cancel = {
            let confirm_delete = confirm_delete.clone();
            Callback::from(move |_: MouseEvent| confirm_delete.set(false))
        };
        html! {
            <div class="alert alert-danger p-2">
                <p>
                    { "Are you sure you want to delete this comment? This will also delete all replies." }
                </p>
                <button class="btn btn-sm btn-danger" onclick={ on_confirm }>{ "Yes, Delete" }</button>
                <button class="btn btn-sm btn-outline-secondary" onclick={ on_cancel }>
                    { "Cancel" }
                </button>
            </div>
        }
    });

    let reply_form = (*replying).clone().filter(|_| show_reply).map(|draft| {
        let on_post = {
            let replying = replying.clone();
            let parent = Some(c.id.clone());
            let draft = draft.clone();
            p.on_action.reform(move |_: MouseEvent| {
                replying.set(None);
                CommentAction::Add {
                    parent: parent.clone(),
                    content: draft.clone(),
                }
            })
        };
        let on_cancel = {
            let replying = replying.clone();
            Callback::from(move |_: MouseEvent| replying.set(None))
        };
        let on_input = {
            let replying = replying.clone();
            Callback::from(move |e: InputEvent| replying.set(Some(textarea_value(e))))
        };
        html! {
            <div class="comment-reply pt-2">
                <textarea
                    class="form-control"
                    placeholder="Write a reply..."
                    value={ draft.clone() }
                    oninput={ on_input }
                />
                <button
                    class="btn btn-sm btn-primary"
                    disabled={ draft.trim().is_empty() }
                    onclick={ on_post }
                >
                    { "Post Reply" }
                </button>
                <button class="btn btn-sm btn-outline-secondary" onclick={ on_cancel }>
                    { "Cancel" }
                </button>
            </div>
        }
    });

    html! {
        <div class={ classes!("comment", (p.depth > 0).then(|| "comment-reply-level")) }>
            <div class="comment-header">
                <strong>{ &c.author }</strong>
                <small class="text-muted ms-2">{ util::format_time(&c.created_at) }</small>
                { for c.is_edited().then(|| html! {
                    <small class="text-muted ms-1">{ "(edited)" }</small>
                }) }
            </div>
            { body }
            <div class="comment-actions d-flex align-items-center">
                { vote_button(VoteDirection::Up) }
                <span class="comment-votes">{ c.votes.to_string() }</span>
                { vote_button(VoteDirection::Down) }
                { for actions }
            </div>
            { for delete_confirmation }
            { for reply_form }
            <div class="comment-replies">
                { for p.node.replies.iter().map(|r| html! {
                    <CommentItem
                        key={ r.comment.id.to_string() }
                        node={ r.clone() }
                        depth={ p.depth + 1 }
                        votes={ p.votes.clone() }
                        on_action={ p.on_action.clone() }
                    />
                }) }
            </div>
        </div>
    }
}
