//! Module lifecycle entry point
//!
//! Windows loads the library through `LoadLibrary` and notifies it via
//! `DllMain`. Nothing in this crate holds per-process or per-thread state, so
//! every notification is acknowledged without doing any work. The loader
//! holds its lock while calling in: no allocation, no blocking, no panics.

/// Reason a loader notification was delivered
///
/// Raw values are the Win32 `DLL_*` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleEvent {
    /// `DLL_PROCESS_DETACH`
    ProcessDetach,
    /// `DLL_PROCESS_ATTACH`
    ProcessAttach,
    /// `DLL_THREAD_ATTACH`
    ThreadAttach,
    /// `DLL_THREAD_DETACH`
    ThreadDetach,
    /// Any code outside the documented set
    Other(u32),
}

impl ModuleEvent {
    /// Decode a raw reason code
    pub fn from_raw(reason: u32) -> Self {
        match reason {
            0 => ModuleEvent::ProcessDetach,
            1 => ModuleEvent::ProcessAttach,
            2 => ModuleEvent::ThreadAttach,
            3 => ModuleEvent::ThreadDetach,
            other => ModuleEvent::Other(other),
        }
    }

    /// Raw reason code
    pub fn as_raw(self) -> u32 {
        match self {
            ModuleEvent::ProcessDetach => 0,
            ModuleEvent::ProcessAttach => 1,
            ModuleEvent::ThreadAttach => 2,
            ModuleEvent::ThreadDetach => 3,
            ModuleEvent::Other(code) => code,
        }
    }
}

/// Handle a loader notification
///
/// Always reports success. Per-process setup, if ever needed, belongs in the
/// `ProcessAttach` arm.
#[inline]
pub fn on_module_event(event: ModuleEvent) -> bool {
    match event {
        ModuleEvent::ProcessAttach => {}
        ModuleEvent::ProcessDetach => {}
        ModuleEvent::ThreadAttach | ModuleEvent::ThreadDetach => {}
        ModuleEvent::Other(_) => {}
    }
    true
}

/// Windows DLL entry point
///
/// # Safety
/// Called by the loader only. `module` and `reserved` are never dereferenced.
#[cfg(windows)]
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "system" fn DllMain(
    _module: winapi::shared::minwindef::HINSTANCE,
    reason: winapi::shared::minwindef::DWORD,
    _reserved: winapi::shared::minwindef::LPVOID,
) -> winapi::shared::minwindef::BOOL {
    if on_module_event(ModuleEvent::from_raw(reason)) {
        winapi::shared::minwindef::TRUE
    } else {
        winapi::shared::minwindef::FALSE
    }
}
