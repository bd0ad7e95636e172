//! Notification inbox shared by the navbar badge and the dashboard card.

use leptos::prelude::*;
use loan_core::notifications::NotificationFeed;

#[derive(Clone, Copy)]
pub struct Inbox {
    pub feed: RwSignal<NotificationFeed>,
    pub unread: Signal<usize>,
}

impl Inbox {
    fn new() -> Self {
        let feed = RwSignal::new(NotificationFeed::sample());
        let unread = Signal::derive(move || feed.with(NotificationFeed::unread_count));
        Self { feed, unread }
    }

    pub fn mark_read(&self, id: &str) {
        self.feed.update(|feed| {
            feed.mark_read(id);
        });
    }
}

#[component]
pub fn InboxProvider(children: Children) -> impl IntoView {
    provide_context(Inbox::new());

    view! { {children()} }
}

pub fn use_inbox() -> Inbox {
    use_context::<Inbox>().unwrap_or_else(Inbox::new)
}
