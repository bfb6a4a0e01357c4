/// Both calls block until the user dismisses the dialog.
pub trait DialogPresenter {
    fn info(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}

#[cfg(windows)]
#[derive(Debug, Default)]
pub struct MessageBoxPresenter;

#[cfg(windows)]
impl MessageBoxPresenter {
    fn show(title: &str, message: &str, icon: winapi::shared::minwindef::UINT) {
        use std::{ffi::OsStr, iter::once, os::windows::ffi::OsStrExt, ptr};
        use winapi::um::winuser::{MessageBoxW, MB_OK, MB_SETFOREGROUND};

        let wide = |s: &str| -> Vec<u16> { OsStr::new(s).encode_wide().chain(once(0)).collect() };
        let title = wide(title);
        let message = wide(message);

        unsafe {
            MessageBoxW(
                ptr::null_mut(),
                message.as_ptr(),
                title.as_ptr(),
                MB_OK | MB_SETFOREGROUND | icon,
            );
        }
    }
}

#[cfg(windows)]
impl DialogPresenter for MessageBoxPresenter {
    fn info(&self, title: &str, message: &str) {
        Self::show(title, message, winapi::um::winuser::MB_ICONINFORMATION);
    }

    fn error(&self, title: &str, message: &str) {
        Self::show(title, message, winapi::um::winuser::MB_ICONERROR);
    }
}

#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl DialogPresenter for ConsolePresenter {
    fn info(&self, title: &str, message: &str) {
        println!("[{}]\n{}", title, message);
    }

    fn error(&self, title: &str, message: &str) {
        eprintln!("[{}]\n{}", title, message);
    }
}

#[cfg(windows)]
pub fn native_presenter() -> MessageBoxPresenter {
    MessageBoxPresenter
}

#[cfg(not(windows))]
pub fn native_presenter() -> ConsolePresenter {
    ConsolePresenter
}
