use dioxus::prelude::*;

use crate::{
    domain::{AppState, Category, CategoryFilter},
    ui::theme,
};

#[component]
pub fn FilterBar(visible: usize) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let query = state.with(|st| st.query.clone());
    let options = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-controls",
                div { class: "input-wrap",
                    span { class: "input-glyph", "🔍" }
                    input {
                        class: "{theme::input_with_icon()} search-input",
                        placeholder: "Search cars...",
                        value: "{query.search}",
                        oninput: move |evt: FormEvent| {
                            let search = evt.value();
                            state.with_mut(|st| st.query.search = search);
                        },
                    }
                }
                select {
                    class: "{theme::input_class()} category-select",
                    value: "{query.category.value()}",
                    onchange: move |evt: FormEvent| {
                        let category = CategoryFilter::from_value(&evt.value());
                        tracing::debug!(category = category.value(), "category filter changed");
                        state.with_mut(|st| st.query.category = category);
                    },
                    for choice in options {
                        option {
                            key: "{choice.value()}",
                            value: "{choice.value()}",
                            selected: choice == query.category,
                            "{choice.label()}"
                        }
                    }
                }
            }
            div { class: "{theme::text_muted()}", "{visible} cars available" }
        }
    }
}
