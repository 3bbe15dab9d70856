//! Reactive driver for the typewriter placeholder
//!
//! The pure state lives in [`crate::core::typewriter`]. This module owns the
//! timer: an async task waits out each delay returned by
//! [`PlaceholderCycle::tick`] and publishes the new text into a signal.

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use crate::core::{PlaceholderCycle, TypewriterConfig};

/// Run a typewriter over `phrases` for as long as the calling component lives.
///
/// Returns the text to display. When the component is unmounted the task is
/// aborted, which drops the pending timeout so nothing fires afterwards.
/// On the server no task runs and the text stays empty.
pub fn use_typewriter(phrases: &[&'static str], config: TypewriterConfig) -> ReadSignal<String> {
    let (text, set_text) = signal(String::new());

    let cycle = match PlaceholderCycle::new(phrases.iter().copied(), config) {
        Ok(cycle) => cycle,
        Err(err) => {
            leptos::logging::warn!("typewriter disabled: {}", err);
            return text;
        }
    };

    #[cfg(not(feature = "ssr"))]
    {
        use futures::future::{AbortHandle, Abortable};
        use gloo_timers::future::TimeoutFuture;

        let sleep = |delay: Duration| TimeoutFuture::new(as_millis(delay));
        let (abort_handle, registration) = AbortHandle::new_pair();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = Abortable::new(drive(cycle, set_text, sleep), registration).await;
        });
        on_cleanup(move || abort_handle.abort());
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (cycle, set_text);
    }

    text
}

/// Tick `cycle` forever, sleeping for each returned delay.
///
/// Returns once `set_text` has been disposed, so a task whose abort was
/// missed still stops on its next tick.
#[cfg_attr(all(feature = "ssr", not(test)), allow(dead_code))]
async fn drive<S, F>(mut cycle: PlaceholderCycle, set_text: WriteSignal<String>, mut sleep: S)
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut delay = cycle.config().typing_interval;
    loop {
        sleep(delay).await;
        delay = cycle.tick();

        if set_text.try_set(cycle.display().to_owned()).is_some() {
            break;
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn as_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_drive_stops_once_the_owner_is_disposed() {
        let owner = Owner::new();
        owner.set();

        let (text, set_text) = signal(String::new());
        let config = TypewriterConfig::default();
        let cycle = PlaceholderCycle::new(["cat"], config).unwrap();

        // (delay asked for, text on screen while waiting)
        let sleeps = Rc::new(RefCell::new(Vec::<(Duration, String)>::new()));
        let sleep = {
            let sleeps = Rc::clone(&sleeps);
            let owner = owner.clone();
            move |delay: Duration| {
                assert!(sleeps.borrow().len() < 4, "ticked after the owner was disposed");
                let shown = text.try_get_untracked().unwrap_or_default();
                sleeps.borrow_mut().push((delay, shown));
                // Unmount while "cat" is fully typed and paused
                if sleeps.borrow().len() == 4 {
                    owner.cleanup();
                }
                std::future::ready(())
            }
        };

        futures::executor::block_on(drive(cycle, set_text, sleep));

        let sleeps = sleeps.borrow();
        assert_eq!(
            *sleeps,
            vec![
                (config.typing_interval, String::new()),
                (config.typing_interval, "c".to_string()),
                (config.typing_interval, "ca".to_string()),
                (config.pause, "cat".to_string()),
            ]
        );
        assert!(text.try_get_untracked().is_none());
    }

    #[test]
    fn test_drive_cycles_phrases_while_mounted() {
        let owner = Owner::new();
        owner.set();

        let (text, set_text) = signal(String::new());
        let cycle = PlaceholderCycle::new(["ab", "c"], TypewriterConfig::default()).unwrap();

        let ticks = Rc::new(RefCell::new(Vec::<String>::new()));
        let sleep = {
            let ticks = Rc::clone(&ticks);
            let owner = owner.clone();
            move |_delay: Duration| {
                let shown = text.get_untracked();
                let mut ticks = ticks.borrow_mut();
                assert!(ticks.len() < 10, "ticked after the owner was disposed");
                ticks.push(shown);
                // Back on the first phrase by now
                if ticks.len() == 10 {
                    owner.cleanup();
                }
                std::future::ready(())
            }
        };

        futures::executor::block_on(drive(cycle, set_text, sleep));

        assert_eq!(
            *ticks.borrow(),
            ["", "a", "ab", "a", "", "c", "", "a", "ab", "a"]
        );
    }
}
