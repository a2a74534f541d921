//! Login form whose check runs off the UI thread.

use cellui::settings::Settings;
use cellui::ui::core::box_model::{Align, Border, BorderKind};
use cellui::ui::core::element::BoxedElement;
use cellui::ui::widgets::{palette, Button, CheckBox, EditBox, Func, Layout, Loading, Text};
use cellui::ui::{Placement, Queue, TaskRunner, Window, WindowResult, WindowState};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// Outcome of one login attempt.
#[derive(Debug)]
pub struct LoginMsg(pub WindowResult);

impl LoginMsg {
    /// The attempt died before producing a verdict.
    pub fn failed(reason: String) -> Self {
        LoginMsg(WindowResult::error(format!("login failed: {reason}")))
    }
}

pub type Authenticate = Arc<dyn Fn(&Credentials) -> WindowResult + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    Empty,
    Busy,
    Message(String),
}

pub fn run(settings: &Settings) -> io::Result<WindowResult> {
    let queue = Queue::new();
    let runner = Rc::new(TaskRunner::new(
        &queue,
        settings.loading_tick(),
        LoginMsg::failed,
    )?);
    let mut window = login_window(runner, Arc::new(fake_authenticate), settings.loading_tick())
        .placement(Placement::Centered)
        .keymap(settings.keymap());
    cellui::tui::run(&mut window, &queue)
}

/// Accepts `admin` / `hunter2` after a short delay.
fn fake_authenticate(creds: &Credentials) -> WindowResult {
    std::thread::sleep(Duration::from_millis(1500));
    if creds.username == "admin" && creds.password == "hunter2" {
        WindowResult::new(WindowState::Continue).with_message(format!(
            "welcome {} (remember: {})",
            creds.username, creds.remember
        ))
    } else {
        WindowResult::error("invalid username or password")
    }
}

/// Submitting from any field starts one attempt; further submits are ignored
/// until it finishes. A failed attempt shows its message above the form, any
/// other result ends the window.
pub fn login_window(
    runner: Rc<TaskRunner<LoginMsg>>,
    auth: Authenticate,
    tick: Duration,
) -> Window<LoginMsg> {
    let creds = Rc::new(RefCell::new(Credentials::default()));
    let notice = Rc::new(RefCell::new(Notice::Empty));

    let submit: Rc<dyn Fn()> = {
        let creds = Rc::clone(&creds);
        let notice = Rc::clone(&notice);
        Rc::new(move || {
            if runner.is_busy() {
                return;
            }
            *notice.borrow_mut() = Notice::Busy;
            let attempt = creds.borrow().clone();
            let auth = Arc::clone(&auth);
            tracing::info!(user = %attempt.username, "login attempt");
            runner.spawn(move || LoginMsg(auth(&attempt)));
        })
    };
    let on_submit = || {
        let submit = Rc::clone(&submit);
        move || submit()
    };

    let notice_view = {
        let notice = Rc::clone(&notice);
        Func::new(move || -> BoxedElement {
            match &*notice.borrow() {
                Notice::Empty => Box::new(Text::new("")),
                Notice::Busy => Box::new(Loading::new().tick(tick).padding([0, 12])),
                Notice::Message(msg) => Box::new(
                    Text::new(msg.as_str())
                        .width(28)
                        .align(Align::Center)
                        .style(palette::border()),
                ),
            }
        })
    };

    let username = {
        let creds = Rc::clone(&creds);
        EditBox::new(26)
            .padding([0, 1])
            .on_submit(on_submit())
            .on_change(move |s| creds.borrow_mut().username = s.to_string())
    };
    let password = {
        let creds = Rc::clone(&creds);
        EditBox::new(26)
            .hidden()
            .padding([0, 1])
            .on_submit(on_submit())
            .on_change(move |s| creds.borrow_mut().password = s.to_string())
    };
    let remember = {
        let creds = Rc::clone(&creds);
        CheckBox::new()
            .on_submit(on_submit())
            .on_toggle(move |v| creds.borrow_mut().remember = v)
    };

    let root = Layout::vertical()
        .child(
            Layout::horizontal()
                .min_height(1)
                .padding([0, 0, 2])
                .child(notice_view),
        )
        .child(Text::new("Username").width(8))
        .child(username)
        .child(Text::new("Password").width(8))
        .child(password)
        .child(
            Layout::horizontal()
                .padding([0, 0, 0, 9])
                .child(Text::new("Remember?"))
                .child(remember),
        )
        .child(
            Layout::horizontal()
                .padding([2, 0, 0, 7])
                .child(Button::new("Login").padding([0, 5]).on_submit(on_submit())),
        )
        .padding([1, 2])
        .border(Border::new(BorderKind::Thin).style(palette::border()));

    Window::new(root).on_message(move |LoginMsg(result)| {
        if result.state == WindowState::Error {
            let msg = result.message.unwrap_or_default();
            tracing::info!(reason = %msg, "login rejected");
            *notice.borrow_mut() = Notice::Message(msg);
            return None;
        }
        Some(result)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/demo/login.rs"]
mod tests;
