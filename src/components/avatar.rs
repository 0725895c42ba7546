//! Participant avatars and the header stack.

use leptos::prelude::*;
use live::avatar::{AvatarPicker, avatar_url, display_name, stack_layout};

use crate::state::room::RoomState;

#[cfg(feature = "csr")]
fn page_seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
}

#[cfg(not(feature = "csr"))]
fn page_seed() -> u64 {
    0
}

fn draw(picker: StoredValue<AvatarPicker>) -> u32 {
    picker.try_update_value(AvatarPicker::next_index).unwrap_or(0)
}

/// Round avatar with `name` as its tooltip, showing hosted image `index`.
#[component]
pub fn Avatar(name: String, index: u32, #[prop(optional, into)] variant: String) -> impl IntoView {
    let src = avatar_url(index);
    let class = format!("avatar {variant}");

    view! {
        <div class=class data-tooltip=name.clone() title=name>
            <img class="avatar__picture" src=src alt="avatar" />
        </div>
    }
}

/// Up to three other participants, the local user, and a `+N` badge.
#[component]
pub fn AvatarStack() -> impl IntoView {
    let room = expect_context::<RwSignal<RoomState>>();
    // Images are drawn afresh each time the stack re-renders.
    let picker = StoredValue::new(AvatarPicker::seeded(page_seed()));

    let layout = Memo::new(move |_| {
        let ids: Vec<_> = room.with(|state| state.others().iter().map(|o| o.connection_id).collect());
        stack_layout(&ids)
    });

    view! {
        <div class="avatar-stack">
            {move || {
                layout
                    .get()
                    .shown
                    .into_iter()
                    .map(|id| view! { <Avatar name=display_name(id) index=draw(picker) variant="avatar--other" /> })
                    .collect_view()
            }}
            {move || {
                let overflow = layout.get().overflow;
                (overflow > 0).then(|| view! { <div class="avatar-stack__more">{format!("+{overflow}")}</div> })
            }}
            <Avatar name="You".to_owned() index=draw(picker) variant="avatar--self" />
        </div>
    }
}
