use crate::{
    animation::{
        ease::Ease,
        tween::{Tween, TweenSample},
        value::{ValueTree, interpolate},
    },
    foundation::error::{DrawError, DrawResult},
    path::{
        offset::{offset_to_progress, progress_to_offset},
        options::{AnimateOptions, ControllerId, DrawOptions, Opaque, Reference, Step},
        surface::RenderSurface,
    },
};

/// Key under which the dash offset travels in every frame state.
pub const OFFSET_KEY: &str = "offset";

/// Called once when a run reaches its last frame.
pub type Completion = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// What a call to [`PathController::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No run is active.
    Idle,
    /// The active run is still inside its delay.
    Pending,
    /// A frame was applied and delivered.
    Frame,
    /// The final frame was applied and the run finished.
    Completed,
}

struct ActiveRun {
    tween: Tween,
    started_at_ms: Option<f64>,
    step: Option<Step>,
    shape: Option<Opaque>,
    attachment: Option<Opaque>,
    on_complete: Option<Completion>,
    frames: u64,
}

/// Drives the drawing progress of one stroked path.
///
/// Holds at most one active run. `set`, `stop` and `animate` act synchronously; frames of a
/// run are produced by calling [`PathController::tick`] from the caller's frame loop.
pub struct PathController<S: RenderSurface> {
    id: ControllerId,
    surface: S,
    length: f64,
    options: DrawOptions,
    run: Option<ActiveRun>,
}

impl<S: RenderSurface> PathController<S> {
    /// Bind `surface` and show it fully undrawn.
    #[tracing::instrument(skip(surface, options))]
    pub fn new(mut surface: S, options: DrawOptions) -> DrawResult<Self> {
        let length = surface.total_length();
        if !length.is_finite() || length <= 0.0 {
            return Err(DrawError::binding(format!(
                "path length must be finite and positive, got {length}"
            )));
        }
        Ease::resolve(&options.easing)?;

        surface.set_dash_array(length, length);
        let mut controller = Self {
            id: ControllerId::next(),
            surface,
            length,
            options,
            run: None,
        };
        controller.set(0.0)?;
        Ok(controller)
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    pub fn state(&self) -> RunState {
        if self.run.is_some() {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Current progress as read back from the surface.
    pub fn value(&self) -> f64 {
        offset_to_progress(self.surface.computed_dash_offset(), self.length)
    }

    /// Jump to `progress` without frames.
    ///
    /// Any active run is stopped first. The step callback, if configured, is called once with
    /// the default trees interpolated at `progress`.
    pub fn set(&mut self, progress: f64) -> DrawResult<()> {
        self.stop();
        self.surface
            .set_dash_offset(progress_to_offset(progress, self.length));

        if let Some(step) = &self.options.step {
            let ease = Ease::resolve(&self.options.easing)?;
            let values = interpolate(&self.options.from, &self.options.to, progress, ease);
            let reference = Reference::resolve(self.options.shape.as_ref(), self.id);
            step.call(&values, reference, self.options.attachment.as_ref())?;
        }
        Ok(())
    }

    /// Cancel the active run, if any, and pin the offset to what the surface shows now.
    pub fn stop(&mut self) {
        if let Some(run) = self.run.take() {
            tracing::debug!(controller = self.id.0, frames = run.frames, "draw run cancelled");
        }
        let offset = self.surface.computed_dash_offset();
        self.surface.set_dash_offset(offset);
    }

    /// Start a run from the current visual state towards `progress`.
    ///
    /// Returns once the run is installed; frames follow on later [`PathController::tick`]
    /// calls. When `options` carries both `from` and `to` they are used verbatim, otherwise
    /// both ends are derived from the default trees at the current and target progress.
    #[tracing::instrument(skip(self, options, on_complete), fields(controller = self.id.0))]
    pub fn animate(
        &mut self,
        progress: f64,
        options: AnimateOptions,
        on_complete: Option<Completion>,
    ) -> DrawResult<()> {
        let explicit = options.explicit_values();
        let merged = options.merged_over(&self.options);
        let ease = Ease::resolve(&merged.easing)?;

        let (mut from, mut to) = match explicit {
            Some(pair) => pair,
            None => (
                self.values_at(self.value(), ease),
                self.values_at(progress, ease),
            ),
        };

        self.stop();
        self.surface.force_layout();

        let offset = self.surface.computed_dash_offset();
        let target = progress_to_offset(progress, self.length);
        // a caller-supplied offset attribute takes precedence
        if from.get(OFFSET_KEY).is_none() {
            from.insert(OFFSET_KEY, offset);
        }
        if to.get(OFFSET_KEY).is_none() {
            to.insert(OFFSET_KEY, target);
        }

        tracing::debug!(
            from_offset = offset,
            to_offset = target,
            duration = merged.duration,
            delay = merged.delay,
            easing = ease.name(),
            "draw run started"
        );
        self.run = Some(ActiveRun {
            tween: Tween::new(from, to, merged.delay, merged.duration, ease),
            started_at_ms: None,
            step: merged.step,
            shape: merged.shape,
            attachment: merged.attachment,
            on_complete,
            frames: 0,
        });
        Ok(())
    }

    /// Advance the active run to `now_ms`.
    ///
    /// The first tick after `animate` marks the run's start time; a non-finite `now_ms` is
    /// ignored and reported as [`TickOutcome::Pending`]. A step callback error fails
    /// the run: it is logged, the controller returns to idle with the offset left at the last
    /// applied value, and the error is returned.
    pub fn tick(&mut self, now_ms: f64) -> DrawResult<TickOutcome> {
        let Some(run) = self.run.as_mut() else {
            return Ok(TickOutcome::Idle);
        };
        if !now_ms.is_finite() {
            return Ok(TickOutcome::Pending);
        }
        let started = *run.started_at_ms.get_or_insert(now_ms);

        let (state, done) = match run.tween.sample(now_ms - started) {
            TweenSample::Pending => return Ok(TickOutcome::Pending),
            TweenSample::Frame { state, done } => (state, done),
        };

        if let Some(offset) = state.number(OFFSET_KEY) {
            self.surface.set_dash_offset(offset);
        }
        run.frames += 1;

        if let Some(step) = &run.step {
            let reference = Reference::resolve(run.shape.as_ref(), self.id);
            if let Err(err) = step.call(&state, reference, run.attachment.as_ref()) {
                let frames = run.frames;
                self.run = None;
                tracing::error!(
                    controller = self.id.0,
                    frames,
                    error = %err,
                    "error in tweening"
                );
                return Err(DrawError::tween(format!("{err:#}")));
            }
        }

        if !done {
            return Ok(TickOutcome::Frame);
        }

        if let Some(run) = self.run.take() {
            tracing::debug!(controller = self.id.0, frames = run.frames, "draw run completed");
            if let Some(on_complete) = run.on_complete {
                on_complete();
            }
        }
        Ok(TickOutcome::Completed)
    }

    fn values_at(&self, progress: f64, ease: Ease) -> ValueTree {
        interpolate(&self.options.from, &self.options.to, progress, ease)
    }
}

impl<S: RenderSurface + std::fmt::Debug> std::fmt::Debug for PathController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathController")
            .field("id", &self.id)
            .field("surface", &self.surface)
            .field("length", &self.length)
            .field("options", &self.options)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/controller.rs"]
mod tests;
