//! The signed-in user's own profile and boards.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::board_card::BoardCard;
use crate::components::profile_header::ProfileHeader;
use crate::state::catalog::Catalog;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();

    let Some(user) = catalog.current_user().cloned() else {
        return view! {
            <section class="page profile-page">
                <p class="page__empty">"Profile unavailable."</p>
            </section>
        }
        .into_any();
    };

    let boards: Vec<_> = catalog.boards_of(&user.id).into_iter().cloned().collect();
    let has_boards = !boards.is_empty();

    view! {
        <section class="page profile-page">
            <ProfileHeader user=user is_self=true/>
            <h2 class="page__subtitle">"Your boards"</h2>
            <Show when=move || has_boards fallback=|| view! { <p class="page__empty">"No boards yet."</p> }>
                <div class="board-list">
                    {boards
                        .clone()
                        .into_iter()
                        .map(|board| view! { <BoardCard board=board/> })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </section>
    }
    .into_any()
}
