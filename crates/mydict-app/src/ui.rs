use mydict_config::ui::UiConfig;
use mydict_ui::UiBridge;

pub fn ui_loop(config: &UiConfig, bridge: UiBridge) -> anyhow::Result<()> {
    mydict_ui::ui_loop(config, bridge)
}
