//! Browser host for the header state machine
//!
//! The machine lives in a `StoredValue`; every event goes through
//! [`HeaderControl::apply`], which republishes the visibility decision as a
//! signal. Dismiss timers are `setTimeout`s whose firing is routed back
//! through a signal and an effect.

use crate::scroll::body_scroll_lock;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use sitehead_core::{
    DismissHandle, DismissScheduler, DismissToken, HeaderConfig, HeaderMachine, NavigationSet,
    VisibilityDecision,
};
use std::sync::Arc;
use std::time::Duration;

/// Arms dismiss timers with `window.setTimeout`
#[derive(Debug, Clone, Copy)]
pub struct LeptosScheduler {
    fired: WriteSignal<Option<DismissToken>>,
}

impl DismissScheduler for LeptosScheduler {
    type Handle = LeptosTimeout;

    fn schedule(&mut self, delay: Duration, token: DismissToken) -> LeptosTimeout {
        let fired = self.fired;
        match set_timeout_with_handle(move || fired.set(Some(token)), delay) {
            Ok(handle) => LeptosTimeout(Some(handle)),
            Err(e) => {
                leptos::logging::warn!("Failed to arm subnav dismiss timer: {:?}", e);
                LeptosTimeout(None)
            }
        }
    }
}

#[derive(Debug)]
pub struct LeptosTimeout(Option<TimeoutHandle>);

impl DismissHandle for LeptosTimeout {
    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

pub type BrowserHeaderMachine = HeaderMachine<LeptosScheduler>;

/// Handle shared with every header descendant through context
#[derive(Clone, Copy)]
pub struct HeaderControl {
    machine: StoredValue<BrowserHeaderMachine>,
    decision: RwSignal<VisibilityDecision>,
}

impl HeaderControl {
    /// Mount a header machine bound to the current reactive owner. It is
    /// torn down (timer cancelled, scroll lock released) when the owner is
    /// cleaned up.
    pub fn mount(navigation: Arc<NavigationSet>, config: HeaderConfig) -> Self {
        let (fired, set_fired) = signal(None::<DismissToken>);

        let machine = HeaderMachine::new(
            navigation,
            config,
            body_scroll_lock(),
            LeptosScheduler { fired: set_fired },
        );
        let decision = RwSignal::new(machine.decision());
        let control = Self {
            machine: StoredValue::new(machine),
            decision,
        };

        Effect::new(move |_| {
            if let Some(token) = fired.get() {
                control.apply(|m| {
                    m.dismiss_elapsed(token);
                });
            }
        });

        on_cleanup(move || {
            control.apply(|m| m.teardown());
        });

        control
    }

    /// Run one transition and publish the resulting decision
    pub fn apply(&self, f: impl FnOnce(&mut BrowserHeaderMachine)) {
        if self.machine.try_update_value(f).is_none() {
            return;
        }
        if let Some(next) = self.machine.try_with_value(|m| m.decision()) {
            if self.decision.with_untracked(|current| *current != next) {
                self.decision.set(next);
            }
        }
    }

    pub fn decision(&self) -> ReadSignal<VisibilityDecision> {
        self.decision.read_only()
    }

    pub fn enter_item(&self, slug: &str) {
        self.apply(|m| m.enter_item(slug));
    }

    pub fn focus_item(&self, slug: &str) {
        self.apply(|m| m.focus_item(slug));
    }

    pub fn toggle_mobile_menu(&self) {
        self.apply(|m| m.toggle_mobile_menu());
    }

    pub fn navigate(&self) {
        self.apply(|m| m.navigate());
    }

    pub fn close_subnav(&self) {
        self.apply(|m| m.close_subnav());
    }
}

/// Hook to access the enclosing header's control
pub fn use_header_control() -> HeaderControl {
    expect_context::<HeaderControl>()
}
