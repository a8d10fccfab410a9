use yew::prelude::*;

use crate::scene::ElementKind;

/// Drag payload format carrying the tool's kind tag
pub const TOOL_DATA_FORMAT: &str = "type";

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    /// Whether a saved playground exists to load
    pub can_load: bool,
    pub on_save: Callback<()>,
    pub on_load: Callback<()>,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let tools = ElementKind::ALL.iter().map(|kind| {
        let tag = kind.tag();
        let ondragstart = Callback::from(move |e: DragEvent| {
            if let Some(transfer) = e.data_transfer() {
                if let Err(err) = transfer.set_data(TOOL_DATA_FORMAT, tag) {
                    log::warn!("could not start tool drag: {:?}", err);
                }
            }
        });

        html! {
            <div
                key={tag}
                class="tool px-3 py-2 bg-white border border-gray-300 rounded text-sm cursor-grab select-none hover:bg-gray-50"
                draggable="true"
                data-type={tag}
                {ondragstart}
            >
                {kind.label()}
            </div>
        }
    });

    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };
    let on_load = {
        let on_load = props.on_load.clone();
        Callback::from(move |_: MouseEvent| on_load.emit(()))
    };

    html! {
        <div class="flex items-center gap-2 p-3 bg-gray-50 border-b border-gray-300">
            {for tools}
            <div class="flex-1" />
            <button
                id="save"
                onclick={on_save}
                class="px-3 py-1 bg-blue-500 text-white rounded text-sm hover:bg-blue-600"
            >
                {"Save"}
            </button>
            <button
                id="load"
                onclick={on_load}
                disabled={!props.can_load}
                class="px-3 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50 disabled:opacity-50"
            >
                {"Load"}
            </button>
        </div>
    }
}
