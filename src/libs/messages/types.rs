//! Central registry of all user-facing messages.
//!
//! Every piece of text the application prints goes through this enum, which
//! keeps wording in one place and makes the display layer trivially testable.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTracker,
    ConfigModuleServer,
    ConfigModuleOverlay,
    PromptSelectModules,
    PromptIdleThreshold,
    PromptTickInterval,
    PromptServerEnabled,
    PromptServerUrl,
    PromptPlayerName,
    PromptUploadInterval,
    PromptMinUploadSeconds,
    PromptShowOverlay,
    PromptOverlayPosition,

    // === SESSION MESSAGES ===
    SessionStarted(String),       // date
    SessionEnded(String),         // formatted playtime
    IdleStatusChanged(bool),      // true = idle

    // === ROLLOVER MESSAGES ===
    DayRolledOver(String, String), // old date, new date

    // === STORE MESSAGES ===
    StoredValueInvalid(String, String), // key, raw value
    CountersSaveFailed(String),         // error

    // === UPLOAD MESSAGES ===
    UploadSucceeded(String),     // date
    UploadSkippedDisabled,
    UploadSkippedBelowMinimum,
    UploadSkippedNoIdentity,
    UploadFailed(String),        // error or status
    UploadServerNotConfigured,

    // === WATCHER MESSAGES ===
    WatcherStarted,
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    WatcherSignalHandlingNotSupported,
    WatcherShuttingDown,
    InputListenerFailed(String), // error

    // === VIEW MESSAGES ===
    TodayHeader(String), // date
}
