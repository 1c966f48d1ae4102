use std::rc::Rc;

use komento_client::api::{Question, QuestionId};
use yew::prelude::*;

use crate::{api, ui};

pub enum AppMsg {
    ReceivedQuestions(Vec<Question>),
    FetchFailed(String),
    SelectQuestion(QuestionId),
}

pub struct App {
    questions: Rc<Vec<Question>>,
    active: Option<QuestionId>,
    fetch_error: Option<String>,
}

impl App {
    fn fetch_questions(ctx: &Context<Self>) {
        ctx.link().send_future(async move {
            let res = match api::host() {
                Ok(host) => api::fetch_questions(&host).await,
                Err(e) => Err(e),
            };
            match res {
                Ok(questions) => AppMsg::ReceivedQuestions(questions),
                Err(e) => AppMsg::FetchFailed(format!("{e:#}")),
            }
        });
    }

    fn active_question(&self) -> Option<&Question> {
        let id = self.active?;
        self.questions.iter().find(|q| q.id == id)
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self::fetch_questions(ctx);
        App {
            questions: Rc::new(Vec::new()),
            active: None,
            fetch_error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ReceivedQuestions(questions) => {
                tracing::debug!(num_questions = questions.len(), "received questions");
                self.questions = Rc::new(questions);
                self.fetch_error = None;
            }
            AppMsg::FetchFailed(err) => {
                tracing::error!(%err, "failed fetching questions");
                self.fetch_error = Some(err);
            }
            AppMsg::SelectQuestion(id) => {
                self.active = Some(id);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let error_banner = self.fetch_error.as_ref().map(|err| {
            html! {
                <div class="alert alert-danger m-3" role="alert">
                    { format!("Could not load questions: {err}") }
                </div>
            }
        });
        let main = match self.active_question() {
            None => html! {
                <p class="text-center text-muted py-5">
                    { "Search for a question to see its answer and comments." }
                </p>
            },
            Some(q) => html! {
                <article class="question p-3">
                    <small class="badge bg-secondary">{ &q.category }</small>
                    <h2 class="mt-2">{ &q.question }</h2>
                    <p>{ &q.answer }</p>
                    <ui::CommentSection question={ q.id } />
                </article>
            },
        };
        html! {
            <div class="container">
                <header class="sticky-top bg-body">
                    <ui::SearchBar
                        questions={ self.questions.clone() }
                        on_select={ ctx.link().callback(AppMsg::SelectQuestion) }
                    />
                </header>
                { for error_banner }
                <main>{ main }</main>
            </div>
        }
    }
}
