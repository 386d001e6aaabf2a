//! Site header with the hover-intent mega menu.
//!
//! DESIGN
//! ======
//! `MegaMenu` owns the state and deadlines; this component only forwards DOM
//! events with a timestamp and keeps one [`TimerSlot`] armed for
//! [`MegaMenu::next_deadline`]. Every state change re-arms or cancels that
//! timer, so there is never more than one pending open/close callback.

#[cfg(feature = "hydrate")]
use catalog::menu::MenuKey;
use catalog::menu::{Featured, MegaMenu, NavColumn, NavItem};
use leptos::prelude::*;

use crate::util::clock::now_ms;
use crate::util::timer::TimerSlot;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Top bar: logo, mega menu, utility links.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let nav = LocalResource::new(|| crate::net::api::fetch_nav());
    let menu = RwSignal::new(MegaMenu::new());
    let timer = TimerSlot::new();
    let header_ref = NodeRef::<leptos::html::Header>::new();

    // Re-arm the single timer whenever the menu moves to a new phase.
    Effect::new(move || match menu.with(MegaMenu::next_deadline) {
        Some(due_ms) => {
            let delay = due_ms.saturating_sub(now_ms());
            timer.schedule(delay, move || {
                menu.update(|m| {
                    m.advance(now_ms());
                });
            });
        }
        None => timer.cancel(),
    });

    #[cfg(feature = "hydrate")]
    {
        let mut teardown = crate::util::teardown::Teardown::default();
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if menu.with_untracked(MegaMenu::is_idle) {
                return;
            }
            let mut consumed = false;
            menu.update(|m| consumed = m.key(MenuKey::from_dom(&ev.key())));
            if consumed {
                ev.prevent_default();
            }
        });
        teardown.add(move || keydown.remove());
        let click = window_event_listener(leptos::ev::click, move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .zip(header_ref.get_untracked())
                .is_some_and(|(target, header)| header.contains(Some(&target)));
            if !inside && !menu.with_untracked(MegaMenu::is_idle) {
                menu.update(MegaMenu::outside_click);
            }
        });
        teardown.add(move || click.remove());
        on_cleanup(move || teardown.run());
    }

    view! {
        <header class="site-header" node_ref=header_ref>
            <a class="site-header__logo" href="/">"Sensor Storefront"</a>
            <nav class="mega-menu" aria-label="Main">
                <ul class="mega-menu__bar">
                    <Suspense fallback=|| ()>
                        {move || {
                            nav.get()
                                .flatten()
                                .unwrap_or_default()
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| view! { <MenuItem index=index item=item menu=menu/> })
                                .collect::<Vec<_>>()
                        }}
                    </Suspense>
                </ul>
            </nav>
            <a class="site-header__cta" href="/where-to-buy">"Where to Buy"</a>
        </header>
    }
}

/// One top-level entry. Items without a panel are plain links.
#[component]
fn MenuItem(index: usize, item: NavItem, menu: RwSignal<MegaMenu>) -> impl IntoView {
    let has_panel = item.has_panel();
    let is_open = move || menu.with(|m| m.is_open(index));

    let enter = move || menu.update(|m| m.pointer_enter(index, now_ms()));
    let leave = move || menu.update(|m| m.pointer_leave(now_ms()));
    let on_trigger_click = move |ev: leptos::ev::MouseEvent| {
        if has_panel {
            ev.prevent_default();
            menu.update(|m| m.toggle(index));
        }
    };

    let NavItem { label, href, columns, featured } = item;

    view! {
        <li
            class="mega-menu__item"
            class:mega-menu__item--open=is_open
            on:mouseenter=move |_| enter()
            on:mouseleave=move |_| leave()
            on:focusin=move |_| enter()
            on:focusout=move |_| leave()
        >
            <a
                class="mega-menu__trigger"
                href=href
                aria-haspopup=has_panel.then_some("true")
                aria-expanded=move || has_panel.then(|| is_open().to_string())
                on:click=on_trigger_click
            >
                {label}
            </a>
            {has_panel
                .then(|| {
                    view! {
                        <Show when=is_open>
                            <MegaPanel columns=columns.clone() featured=featured.clone() menu=menu/>
                        </Show>
                    }
                })}
        </li>
    }
}

/// Dropdown panel: link columns plus an optional featured block.
#[component]
fn MegaPanel(columns: Vec<NavColumn>, featured: Option<Featured>, menu: RwSignal<MegaMenu>) -> impl IntoView {
    // Following a link closes the menu right away.
    let close = move |_: leptos::ev::MouseEvent| menu.update(MegaMenu::close_now);

    view! {
        <div class="mega-menu__panel" role="region">
            <div class="mega-menu__columns">
                {columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <div class="mega-menu__column">
                                <h3 class="mega-menu__column-title">{column.title}</h3>
                                <ul>
                                    {column
                                        .links
                                        .into_iter()
                                        .map(|link| {
                                            view! {
                                                <li>
                                                    <a class="mega-menu__link" href=link.href on:click=close>
                                                        <span class="mega-menu__link-label">{link.label}</span>
                                                        {link.badge.map(|b| view! { <span class="mega-menu__badge">{b}</span> })}
                                                        {link
                                                            .description
                                                            .map(|d| view! { <span class="mega-menu__link-desc">{d}</span> })}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {featured
                .map(|f| {
                    view! {
                        <aside class="mega-menu__featured">
                            {f.image.map(|src| view! { <img class="mega-menu__featured-image" src=src alt=""/> })}
                            <h3>{f.title}</h3>
                            <p>{f.description}</p>
                            <a class="btn btn--primary" href=f.href on:click=close>
                                {f.cta}
                            </a>
                        </aside>
                    }
                })}
        </div>
    }
}
