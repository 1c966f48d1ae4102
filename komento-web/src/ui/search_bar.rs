use std::rc::Rc;

use komento_client::api::{search_questions, Question, QuestionId};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SearchBarProps {
    pub questions: Rc<Vec<Question>>,
    pub on_select: Callback<QuestionId>,
}

#[function_component(SearchBar)]
pub fn search_bar(p: &SearchBarProps) -> Html {
    let query = use_state(String::new);
    let results = search_questions(&p.questions, &query);
    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value())
        })
    };
    let no_results = (!query.trim().is_empty() && results.is_empty()).then(|| {
        html! {
            <li class="list-group-item text-muted">{ "No matching question" }</li>
        }
    });
    html! {
        <div class="search-bar m-3">
            <input
                type="text"
                class="form-control"
                placeholder="Search questions..."
                aria-label="Search questions"
                value={ (*query).clone() }
                oninput={ on_input }
            />
            <ul class="list-group search-results">
                { for results.into_iter().map(|q| {
                    let on_click = {
                        let query = query.clone();
                        let id = q.id;
                        p.on_select.reform(move |_: MouseEvent| {
                            query.set(String::new());
                            id
                        })
                    };
                    html! {
                        <li class="list-group-item list-group-item-action" onclick={ on_click }>
                            <div>{ &q.question }</div>
                            <small class="text-muted">{ &q.category }</small>
                        </li>
                    }
                }) }
                { for no_results }
            </ul>
        </div>
    }
}
