use crate::config::SafetyDbMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ForceQuit,
    Tick,

    // Settings panel actions
    PanelNextRow,
    PanelPrevRow,
    PanelSelectMode(SafetyDbMode),
    PanelStartEdit,
    PanelCancelEdit,
    PanelCommitEdit,
    PanelToggleMask,
    PanelPaste,

    // Persistence actions
    SettingsSave,
    SettingsReload,

    // Unsaved-changes dialog
    ConfirmSaveAndQuit,
    ConfirmDiscardAndQuit,
    ConfirmCancel,

    None,
}
