use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::{Playground, Toolbar};
use crate::config::EditorConfig;
use crate::editor::EditorState;
use crate::layers_panel::LayersPanel;
use crate::persistence::{LocalStore, StateStore};
use crate::properties_panel::PropertiesPanel;
use crate::scene::{ElementId, PropertyKey, PropertyValue};
use crate::types::Point;
use crate::utils::client_to_local;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: EditorConfig,
}

/// Whether keyboard focus is in a form control, where shortcuts stay off.
fn is_editing_target(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let editor = use_mut_ref(|| EditorState::new(props.config.clone()));
    let update = use_force_update();
    let surface_ref = use_node_ref();
    let store = LocalStore::new(props.config.storage_key.clone());

    // Document-level pointer tracking so a drag ends wherever the button is released
    {
        let editor = editor.clone();
        let update = update.clone();
        let surface_ref = surface_ref.clone();
        use_effect_with((), move |_| {
            let document = gloo_utils::document();

            let mousemove_listener = {
                let editor = editor.clone();
                let update = update.clone();
                EventListener::new(&document, "mousemove", move |event| {
                    if !editor.borrow().is_dragging() {
                        return;
                    }
                    let (Some(mouse_event), Some(surface)) =
                        (event.dyn_ref::<MouseEvent>(), surface_ref.cast::<Element>())
                    else {
                        return;
                    };
                    let point = client_to_local(mouse_event, &surface);
                    let moved = editor.borrow_mut().pointer_move(point);
                    match moved {
                        Ok(true) => update.force_update(),
                        Ok(false) => {}
                        Err(e) => e.report("drag"),
                    }
                })
            };

            let mouseup_listener = {
                let editor = editor.clone();
                EventListener::new(&document, "mouseup", move |_event| {
                    editor.borrow_mut().pointer_up();
                })
            };

            let keydown_listener = {
                let editor = editor.clone();
                let update = update.clone();
                EventListener::new(&document, "keydown", move |event| {
                    if is_editing_target(event) {
                        return;
                    }
                    let Some(keyboard_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                        return;
                    };
                    match keyboard_event.key().as_str() {
                        "Delete" => {
                            let removed = editor.borrow_mut().delete_selected();
                            if removed.is_some() {
                                update.force_update();
                            }
                        }
                        "Escape" => {
                            editor.borrow_mut().click_background();
                            update.force_update();
                        }
                        _ => {}
                    }
                })
            };

            move || {
                drop(mousemove_listener);
                drop(mouseup_listener);
                drop(keydown_listener);
            }
        });
    }

    let on_background_click = {
        let editor = editor.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            editor.borrow_mut().click_background();
            update.force_update();
        })
    };

    let on_drop = {
        let editor = editor.clone();
        let update = update.clone();
        Callback::from(move |(tag, point): (String, Point)| {
            let created = editor.borrow_mut().drop_tool(&tag, point);
            match created {
                Ok(_) => update.force_update(),
                Err(e) => e.report("drop"),
            }
        })
    };

    let on_element_mousedown = {
        let editor = editor.clone();
        let update = update.clone();
        Callback::from(move |(id, point): (ElementId, Point)| {
            let started = editor.borrow_mut().pointer_down(id, point);
            match started {
                Ok(()) => update.force_update(),
                Err(e) => e.report("drag start"),
            }
        })
    };

    let on_select = {
        let editor = editor.clone();
        let update = update.clone();
        Callback::from(move |id: ElementId| {
            let selected = editor.borrow_mut().click_element(id);
            match selected {
                Ok(()) => update.force_update(),
                Err(e) => e.report("select"),
            }
        })
    };

    let on_edit = {
        let editor = editor.clone();
        let update = update.clone();
        Callback::from(move |(key, value): (PropertyKey, PropertyValue)| {
            let edited = editor.borrow_mut().edit_property(key, &value);
            match edited {
                Ok(()) => update.force_update(),
                Err(e) => e.report("edit"),
            }
        })
    };

    let on_delete = {
        let editor = editor.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let removed = editor.borrow_mut().delete_selected();
            if removed.is_some() {
                update.force_update();
            }
        })
    };

    let on_save = {
        let editor = editor.clone();
        let update = update.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            let saved = editor.borrow().save(&store);
            match saved {
                Ok(()) => update.force_update(),
                Err(e) => e.report("save"),
            }
        })
    };

    let on_load = {
        let editor = editor.clone();
        let update = update.clone();
        let store = store.clone();
        Callback::from(move |_: ()| {
            let loaded = editor.borrow_mut().load(&store);
            match loaded {
                Ok(()) => update.force_update(),
                Err(e) => e.report("load"),
            }
        })
    };

    let state = editor.borrow();
    let elements = state.document().elements().to_vec();
    let selected_id = state.selection().id();
    let selected = state.selected().cloned();
    let config = state.config();

    html! {
        <div class="flex flex-col h-screen" onclick={on_background_click}>
            <Toolbar can_load={store.has_state()} {on_save} {on_load} />
            <div class="flex flex-1 overflow-hidden">
                <LayersPanel
                    elements={elements.clone()}
                    selected={selected_id}
                    on_select={on_select.clone()}
                />
                <div class="flex-1 overflow-auto p-6 bg-gray-100">
                    <Playground
                        {elements}
                        selected={selected_id}
                        width={config.playground_width}
                        height={config.playground_height}
                        surface_ref={surface_ref.clone()}
                        {on_drop}
                        {on_element_mousedown}
                        on_element_click={on_select}
                    />
                </div>
                <PropertiesPanel {selected} {on_edit} {on_delete} />
            </div>
        </div>
    }
}
