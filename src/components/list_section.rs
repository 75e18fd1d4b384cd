//! List Section Component
//!
//! One independently ordered section of the list. Owns its
//! `OrderedSection` for as long as it is mounted and reindexes rows live
//! while one is dragged.

use leptos::prelude::*;

use list_order::{Item, ItemId, OrderedSection, Section};

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::cookie::CookiePersistence;

use leptos_dragdrop::*;

fn ids_of(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id).collect()
}

/// Ordered, drag-reorderable section
#[component]
pub fn ListSection(
    section: Section,
    title: &'static str,
    items: Memo<Vec<Item>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config.get_value();

    // Seeded once at mount, from the cookie or the items as they are now
    let natural = items.with_untracked(|items| ids_of(items));
    let persistence = CookiePersistence::new(config.cookie_max_age_days);
    let order = RwSignal::new(OrderedSection::open(&config, section, persistence, &natural));

    // Merge newly visible items into the order
    Effect::new(move |_| {
        let current = items.with(|items| ids_of(items));
        order.maybe_update(|order| order.reconcile(&current));
    });

    let on_signal = move |signal: DragSignal| match signal {
        DragSignal::Arm(id) => order.update(|order| order.arm(id)),
        DragSignal::Disarm => order.update(|order| order.disarm()),
        DragSignal::Start(id) => order.update(|order| order.drag_start(id)),
        DragSignal::Enter(id) => {
            order.maybe_update(|order| order.drag_enter(id));
        }
        DragSignal::Drop => {
            if order.with_untracked(|order| order.drop_accepted()) {
                log::debug!("[DND] {}: drop accepted", section.as_str());
            }
        }
        DragSignal::End => order.update(|order| order.drag_end()),
    };

    // Releases outside any row, and ones after the pointer left its row
    bind_global_mouseup(on_signal);

    let rows = Memo::new(move |_| {
        items.with(|items| {
            order.with(|order| {
                order.rows(items).into_iter().map(|row| row.item.clone()).collect::<Vec<_>>()
            })
        })
    });

    view! {
        <section class=format!("list-section {}", section.as_str())>
            <h2>{title} " (" {move || rows.with(|rows| rows.len())} ")"</h2>
            <ul
                class="todo-list"
                on:dragover=make_on_dragover()
                on:drop=make_on_drop(on_signal)
            >
                <For
                    each=move || rows.get()
                    // Keyed by content, not drag state, so the dragged node survives reindexing
                    key=|item| (item.id, item.description.clone(), item.labels.clone())
                    children=move |item| {
                        let id = item.id;
                        let is_draggable =
                            move || order.with(|order| order.store().is_draggable(id));
                        let is_dragging =
                            move || order.with(|order| order.drag().active() == Some(id));

                        let row_class = move || {
                            let mut c = String::from("todo-row");
                            if is_draggable() { c.push_str(" draggable"); }
                            if is_dragging() { c.push_str(" dragging"); }
                            c
                        };

                        view! {
                            <li
                                class=row_class
                                draggable=move || draggable_attr(is_draggable())
                                on:mousedown=make_on_mousedown(id, on_signal)
                                on:touchstart=make_on_touchstart(id, on_signal)
                                on:mouseup=make_on_mouseup(on_signal)
                                on:touchend=make_on_touchend(on_signal)
                                on:touchcancel=make_on_touchcancel(on_signal)
                                on:dragstart=make_on_dragstart(id, on_signal)
                                on:dragenter=make_on_dragenter(id, on_signal)
                                on:dragend=make_on_dragend(on_signal)
                            >
                                <TodoRow item=item />
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
