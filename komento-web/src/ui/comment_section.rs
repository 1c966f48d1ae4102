use std::{collections::HashMap, rc::Rc};

use komento_client::{
    api::{Error, QuestionId, SortOrder},
    CommentNode, CommentStore,
};
use yew::prelude::*;

use crate::{storage::LocalStorageBackend, ui::CommentAction, ui::CommentItem};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentSectionProps {
    pub question: QuestionId,
}

pub enum CommentSectionMsg {
    Action(CommentAction),
    SetOrder(SortOrder),
    DraftChanged(String),
    DismissError,
    Retry,
}

pub struct CommentSection {
    store: Option<CommentStore<LocalStorageBackend>>,
    order: SortOrder,
    draft: String,
    error: Option<Error>,
    /// Last failed action, if retrying it could succeed
    retry: Option<CommentAction>,
}

impl CommentSection {
    fn open(question: QuestionId) -> (Option<CommentStore<LocalStorageBackend>>, Option<Error>) {
        match CommentStore::open(LocalStorageBackend, question) {
            Ok(store) => (Some(store), None),
            Err(err) => {
                tracing::error!(%question, %err, "failed loading comments");
                (None, Some(err))
            }
        }
    }

    fn perform(&mut self, action: CommentAction) -> Result<(), Error> {
        let Some(store) = self.store.as_mut() else {
            return Ok(());
        };
        match action {
            CommentAction::Add {
                parent: None,
                content,
            } => {
                if store.add(&content)?.is_some() {
                    self.draft.clear();
                }
            }
            CommentAction::Add {
                parent: Some(parent),
                content,
            } => {
                store.reply(parent, &content)?;
            }
            CommentAction::Edit(id, content) => {
                store.edit(id, &content)?;
            }
            CommentAction::Delete(id) => {
                store.delete(id)?;
            }
            CommentAction::Vote(id, dir) => {
                store.vote(id, dir)?;
            }
        }
        Ok(())
    }

    fn submit(&mut self, action: CommentAction) {
        tracing::debug!(?action, "comment action");
        match self.perform(action.clone()) {
            Ok(()) if self.store.is_some() => {
                self.error = None;
                self.retry = None;
            }
            Ok(()) => (),
            Err(err) => {
                self.retry = err.is_transient().then_some(action);
                self.error = Some(err);
            }
        }
    }

    fn view_sort_buttons(&self, ctx: &Context<Self>) -> Html {
        SortOrder::ALL
            .into_iter()
            .map(|order| {
                let variant = match order == self.order {
                    true => "btn-primary",
                    false => "btn-outline-primary",
                };
                html! {
                    <button
                        type="button"
                        class={ classes!("btn", "btn-sm", variant) }
                        onclick={ ctx.link().callback(move |_: MouseEvent| CommentSectionMsg::SetOrder(order)) }
                    >
                        { order.label() }
                    </button>
                }
            })
            .collect()
    }
}

impl Component for CommentSection {
    type Message = CommentSectionMsg;
    type Properties = CommentSectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (store, error) = Self::open(ctx.props().question);
        CommentSection {
            store,
            order: SortOrder::default(),
            draft: String::new(),
            error,
            retry: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().question != old_props.question {
            let (store, error) = Self::open(ctx.props().question);
            self.store = store;
            self.error = error;
            self.retry = None;
            self.draft.clear();
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentSectionMsg::Action(action) => self.submit(action),
            CommentSectionMsg::Retry => {
                if let Some(action) = self.retry.take() {
                    self.submit(action);
                }
            }
            CommentSectionMsg::SetOrder(order) => self.order = order,
            CommentSectionMsg::DraftChanged(draft) => self.draft = draft,
            CommentSectionMsg::DismissError => {
                self.error = None;
                self.retry = None;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (forest, count) = match &self.store {
            Some(store) => (store.tree(self.order), store.len()),
            None => (Vec::new(), 0),
        };
        let votes = Rc::new(match &self.store {
            Some(store) => CommentNode::walk(&forest)
                .map(|(_, n)| (n.comment.id.clone(), store.vote_state(&n.comment.id)))
                .collect(),
            None => HashMap::new(),
        });
        let on_action = ctx.link().callback(CommentSectionMsg::Action);
        let error_banner = self.error.as_ref().map(|err| {
            html! {
                <div class="alert alert-warning d-flex justify-content-between" role="alert">
                    <span>{ format!("Your last change could not be saved: {err}") }</span>
                    { for self.retry.is_some().then(|| html! {
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-dark ms-auto me-2"
                            onclick={ ctx.link().callback(|_: MouseEvent| CommentSectionMsg::Retry) }
                        >
                            { "Retry" }
                        </button>
                    }) }
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Dismiss"
                        onclick={ ctx.link().callback(|_: MouseEvent| CommentSectionMsg::DismissError) }
                    >
                    </button>
                </div>
            }
        });
        let on_draft = ctx.link().callback(|e: InputEvent| {
            let elt: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            CommentSectionMsg::DraftChanged(elt.value())
        });
        let on_post = {
            let content = self.draft.clone();
            on_action.reform(move |_: MouseEvent| CommentAction::Add {
                parent: None,
                content: content.clone(),
            })
        };
        let empty_notice = forest.is_empty().then(|| {
            html! {
                <p class="text-center text-muted py-4">
                    { "No comments yet. Be the first to comment!" }
                </p>
            }
        });

        html! {
            <section class="comments mt-4">
                <div class="d-flex align-items-center justify-content-between">
                    <h3>{ format!("Comments ({count})") }</h3>
                    <div class="btn-group">{ self.view_sort_buttons(ctx) }</div>
                </div>
                { for error_banner }
                <div class="new-comment my-3">
                    <textarea
                        class="form-control"
                        placeholder="Add a comment..."
                        value={ self.draft.clone() }
                        oninput={ on_draft }
                    />
                    <button
                        class="btn btn-primary mt-2"
                        disabled={ self.store.is_none() || self.draft.trim().is_empty() }
                        onclick={ on_post }
                    >
                        { "Post Comment" }
                    </button>
                </div>
                <div class="comment-list">
                    { for forest.iter().map(|n| html! {
                        <CommentItem
                            key={ n.comment.id.to_string() }
                            node={ n.clone() }
                            depth={ 0 }
                            votes={ votes.clone() }
                            on_action={ on_action.clone() }
                        />
                    }) }
                    { for empty_notice }
                </div>
            </section>
        }
    }
}
