use std::marker::PhantomData;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Elm style runtime: one thread owns the state and applies `transition` to
/// each incoming event, effects run on their own threads and report back
/// through the event channel.
pub struct StateMachine<TState, TEvent, TEffect, T, R, E, X>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    R: Fn(&TState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
    X: Fn(&TState) -> Option<Result<(), Box<dyn std::error::Error + Send + Sync>>> + Send + Sync,
{
    pub init: (TState, Vec<TEffect>),
    pub transition_fn: Arc<T>,
    pub render_fn: Arc<R>,
    pub run_effect_fn: Arc<E>,
    pub exit_fn: Arc<X>,
    _event: PhantomData<TEvent>,
}

impl<TState, TEvent, TEffect, T, R, E, X> StateMachine<TState, TEvent, TEffect, T, R, E, X>
where
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync + 'static,
    R: Fn(&TState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> + Send + Sync + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
    X: Fn(&TState) -> Option<Result<(), Box<dyn std::error::Error + Send + Sync>>>
        + Send
        + Sync
        + 'static,
{
    pub fn new(
        init: (TState, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
        exit_fn: X,
    ) -> Self {
        Self {
            init,
            transition_fn: Arc::new(transition_fn),
            render_fn: Arc::new(render_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            exit_fn: Arc::new(exit_fn),
            _event: PhantomData,
        }
    }

    #[cfg(test)]
    pub fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (event_sender, event_receiver) = channel();
        self.run_with_channel(event_sender, event_receiver)
    }

    /// Runs until `exit_fn` reports an outcome for the current state.
    pub fn run_with_channel(
        self,
        event_sender: Sender<TEvent>,
        event_receiver: Receiver<TEvent>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut state, effects) = self.init;

        (self.render_fn)(&state)?;
        spawn_effects(&self.run_effect_fn, &event_sender, effects);

        loop {
            let event = event_receiver.recv()?;

            let (new_state, new_effects) = (self.transition_fn)(state, event);
            state = new_state;

            (self.render_fn)(&state)?;

            if let Some(outcome) = (self.exit_fn)(&state) {
                return outcome;
            }

            spawn_effects(&self.run_effect_fn, &event_sender, new_effects);
        }
    }
}

fn spawn_effects<TEvent, TEffect, E>(
    run_effect_fn: &Arc<E>,
    event_sender: &Sender<TEvent>,
    effects: Vec<TEffect>,
) where
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
{
    for effect in effects {
        let effect_sender = event_sender.clone();
        let run_effect_fn = Arc::clone(run_effect_fn);
        std::thread::spawn(move || {
            run_effect_fn(effect, effect_sender);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    enum CounterEvent {
        Increment,
        Added(u32),
        Stop,
    }

    #[derive(Debug)]
    enum CounterEffect {
        AddLater(u32),
    }

    #[test]
    fn test_effects_feed_back_into_transition() {
        let rendered = Arc::new(Mutex::new(Vec::new()));
        let rendered_clone = rendered.clone();

        let machine = StateMachine::new(
            (0u32, vec![CounterEffect::AddLater(10)]),
            |count: u32, event: CounterEvent| match event {
                CounterEvent::Increment => (count + 1, vec![]),
                CounterEvent::Added(n) => (count + n, vec![]),
                CounterEvent::Stop => (u32::MAX, vec![]),
            },
            move |count: &u32| {
                rendered_clone.lock().unwrap().push(*count);
                Ok(())
            },
            |effect: CounterEffect, sender: Sender<CounterEvent>| match effect {
                CounterEffect::AddLater(n) => {
                    sender.send(CounterEvent::Added(n)).unwrap();
                    sender.send(CounterEvent::Increment).unwrap();
                    sender.send(CounterEvent::Stop).unwrap();
                }
            },
            |count: &u32| (*count == u32::MAX).then_some(Ok(())),
        );

        machine.run().unwrap();

        assert_eq!(*rendered.lock().unwrap(), vec![0, 10, 11, u32::MAX]);
    }

    #[test]
    fn test_exit_error_is_returned() {
        let (sender, receiver) = channel();
        sender.send(CounterEvent::Stop).unwrap();

        let machine = StateMachine::new(
            (0u32, Vec::<CounterEffect>::new()),
            |_count: u32, _event: CounterEvent| (1, vec![]),
            |_count: &u32| Ok(()),
            |_effect: CounterEffect, _sender: Sender<CounterEvent>| {},
            |count: &u32| (*count == 1).then(|| Err("stopped".into())),
        );

        let result = machine.run_with_channel(sender, receiver);

        assert_eq!(result.unwrap_err().to_string(), "stopped");
    }
}
