//! Per-cycle acquisition state machines for analog channels and buttons.
//!
//! A scanner owns all of its per-channel state exclusively; the only thing
//! it shares with the rest of the system is the [`EventSink`] it publishes
//! into. The platform layer runs each scanner from its own task, one
//! sweep/poll per cycle, with a timer yield in between.

use embedded_hal_async::delay::DelayNs;
use event_proto::{AxisLayout, InputEvent};

use crate::button::ButtonTracker;
use crate::filter::MovingAverage;
use crate::normalize::{normalize, AxisCalib};
use crate::sample::{AnalogSource, DigitalSource, SampleError};
use crate::select::{ChannelSelector, MuxPins};
use crate::sink::{EventSink, SinkError};

/// Outcome of one sweep or poll cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepStats {
    /// Events accepted by the sink this cycle.
    pub published: u8,
    /// Events the sink dropped under backpressure this cycle.
    pub dropped: u8,
}

/// Smoothing and calibration state for one analog channel.
#[derive(Clone, Copy, Debug)]
struct AnalogChannelState<const W: usize> {
    filter: MovingAverage<W>,
    calib: AxisCalib,
}

impl<const W: usize> AnalogChannelState<W> {
    const fn new(calib: AxisCalib) -> Self {
        Self {
            // Center-filled window: a freshly started channel reads neutral
            // instead of emitting a burst of full-deflection events while
            // the window warms up.
            filter: MovingAverage::new(calib.center),
            calib,
        }
    }
}

/// Scans all analog channels once per cycle in fixed round-robin order.
///
/// Each channel goes through route/settle -> sample -> release, then the
/// moving average and normalizer; only values outside the dead-zone become
/// events. `C` is the channel count, `W` the filter window length.
pub struct AnalogScanner<P, D, A, const W: usize, const C: usize> {
    selector: ChannelSelector<P, D>,
    adc: A,
    channels: [AnalogChannelState<W>; C],
    layout: AxisLayout,
}

impl<P, D, A, const W: usize, const C: usize> AnalogScanner<P, D, A, W, C>
where
    P: MuxPins,
    D: DelayNs,
    A: AnalogSource,
{
    /// Create a scanner applying `calib` to every channel.
    pub fn new(
        selector: ChannelSelector<P, D>,
        adc: A,
        calib: AxisCalib,
        layout: AxisLayout,
    ) -> Self {
        Self {
            selector,
            adc,
            channels: [AnalogChannelState::new(calib); C],
            layout,
        }
    }

    /// Sample, filter, and normalize every channel, publishing the values
    /// worth reporting.
    ///
    /// A conversion failure aborts the sweep with the multiplexer released;
    /// the caller logs it and retries on the next cycle. Sink backpressure
    /// is not an error: dropped events are counted in the returned stats.
    pub async fn sweep<S: EventSink>(&mut self, sink: &mut S) -> Result<SweepStats, SampleError> {
        let mut stats = SweepStats::default();

        for channel in 0..C {
            self.selector.route(channel as u8).await;
            let raw = match self.adc.read_raw().await {
                Ok(raw) => raw,
                Err(e) => {
                    self.selector.release();
                    return Err(e);
                }
            };
            self.selector.release();

            let state = &mut self.channels[channel];
            let filtered = state.filter.update(raw);
            let value = normalize(filtered, &state.calib);
            if value == 0 {
                // At rest (or idle jitter); not worth reporting.
                continue;
            }

            let event = InputEvent {
                axis: self.layout.analog_axis(channel as u8),
                value,
            };
            match sink.publish(event).await {
                Ok(()) => stats.published += 1,
                Err(SinkError::QueueFull) => stats.dropped += 1,
            }
        }

        Ok(stats)
    }
}

/// Polls all button pins once per cycle, publishing transitions.
pub struct ButtonScanner<D, const B: usize> {
    source: D,
    trackers: [ButtonTracker; B],
    layout: AxisLayout,
}

impl<D: DigitalSource, const B: usize> ButtonScanner<D, B> {
    /// Create a scanner with every button initially released.
    pub fn new(source: D, layout: AxisLayout) -> Self {
        Self {
            source,
            trackers: [ButtonTracker::new(); B],
            layout,
        }
    }

    /// Sample every button and publish one event per logical transition.
    pub async fn poll<S: EventSink>(&mut self, sink: &mut S) -> SweepStats {
        let mut stats = SweepStats::default();

        for index in 0..B {
            let level_low = self.source.is_low(index);
            let Some(pressed) = self.trackers[index].update(level_low) else {
                continue;
            };

            let event = InputEvent {
                axis: self.layout.button_axis(index as u8),
                value: pressed as i16,
            };
            match sink.publish(event).await {
                Ok(()) => stats.published += 1,
                Err(SinkError::QueueFull) => stats.dropped += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;
    use crate::test_util::block_on;

    const CALIB: AxisCalib = AxisCalib {
        center: 2047,
        max_deviation: 2047,
        scale: 255,
        deadzone: 30,
    };
    const LAYOUT: AxisLayout = AxisLayout::new(2, 2);

    struct NullPins;
    impl MuxPins for NullPins {
        fn set_address(&mut self, _channel: u8) {}
        fn set_enabled(&mut self, _enabled: bool) {}
    }

    struct NullDelay;
    impl DelayNs for NullDelay {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Replays a fixed sample per channel, sweep after sweep.
    struct ScriptedAdc {
        per_channel: Vec<u16>,
        next: usize,
    }

    impl ScriptedAdc {
        fn new(per_channel: Vec<u16>) -> Self {
            Self {
                per_channel,
                next: 0,
            }
        }
    }

    impl AnalogSource for ScriptedAdc {
        async fn read_raw(&mut self) -> Result<u16, SampleError> {
            let sample = self.per_channel[self.next % self.per_channel.len()];
            self.next += 1;
            Ok(sample)
        }
    }

    struct FailingAdc;
    impl AnalogSource for FailingAdc {
        async fn read_raw(&mut self) -> Result<u16, SampleError> {
            Err(SampleError::Conversion)
        }
    }

    /// Records everything published, in order.
    #[derive(Default)]
    struct VecSink {
        events: Vec<InputEvent>,
    }

    impl EventSink for VecSink {
        async fn publish(&mut self, event: InputEvent) -> Result<(), SinkError> {
            self.events.push(event);
            Ok(())
        }
    }

    /// Accepts `capacity` events, then reports the queue as full.
    struct SaturatingSink {
        accepted: Vec<InputEvent>,
        capacity: usize,
    }

    impl EventSink for SaturatingSink {
        async fn publish(&mut self, event: InputEvent) -> Result<(), SinkError> {
            if self.accepted.len() >= self.capacity {
                return Err(SinkError::QueueFull);
            }
            self.accepted.push(event);
            Ok(())
        }
    }

    fn scanner(adc: ScriptedAdc) -> AnalogScanner<NullPins, NullDelay, ScriptedAdc, 5, 2> {
        AnalogScanner::new(
            ChannelSelector::new(NullPins, NullDelay, 10),
            adc,
            CALIB,
            LAYOUT,
        )
    }

    #[test]
    fn test_centered_samples_emit_nothing() {
        let mut scanner = scanner(ScriptedAdc::new(Vec::from([2047, 2047])));
        let mut sink = VecSink::default();

        for _ in 0..5 {
            let stats = block_on(scanner.sweep(&mut sink)).unwrap();
            assert_eq!(stats, SweepStats::default());
        }
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_deflection_reports_on_the_right_axis() {
        // Channel 0 held at rest, channel 1 hard over.
        let mut scanner = scanner(ScriptedAdc::new(Vec::from([2047, 4094])));
        let mut sink = VecSink::default();

        // Run enough sweeps for channel 1's center-filled window to converge.
        for _ in 0..5 {
            block_on(scanner.sweep(&mut sink)).unwrap();
        }

        let last = sink.events.last().unwrap();
        assert_eq!(last.axis, LAYOUT.analog_axis(1));
        assert_eq!(last.value, 255);
        assert!(sink.events.iter().all(|e| e.axis == 1));
    }

    #[test]
    fn test_warmup_converges_monotonically() {
        // A hard deflection against a center-filled window: the reported
        // value climbs toward full scale as pad slots are evicted, one per
        // sweep, and never overshoots on the way.
        let mut scanner = scanner(ScriptedAdc::new(Vec::from([2047, 4094])));
        let mut sink = VecSink::default();

        for _ in 0..6 {
            block_on(scanner.sweep(&mut sink)).unwrap();
        }

        let values: Vec<i16> = sink.events.iter().map(|e| e.value).collect();
        // First sweep mean: (2047*4 + 4094)/5 = 2456 -> 50
        assert_eq!(values[0], 50);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*values.last().unwrap(), 255);
    }

    #[test]
    fn test_same_producer_fifo_order() {
        // Both channels deflected: each sweep publishes channel 0 before
        // channel 1, every sweep.
        let mut scanner = scanner(ScriptedAdc::new(Vec::from([0, 4094])));
        let mut sink = VecSink::default();

        for _ in 0..3 {
            block_on(scanner.sweep(&mut sink)).unwrap();
        }

        let axes: Vec<u8> = sink.events.iter().map(|e| e.axis).collect();
        assert_eq!(axes, [0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_adc_failure_aborts_sweep() {
        let mut scanner: AnalogScanner<NullPins, NullDelay, FailingAdc, 5, 2> =
            AnalogScanner::new(
                ChannelSelector::new(NullPins, NullDelay, 10),
                FailingAdc,
                CALIB,
                LAYOUT,
            );
        let mut sink = VecSink::default();

        assert_eq!(
            block_on(scanner.sweep(&mut sink)),
            Err(SampleError::Conversion)
        );
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_queue_full_counts_drops_and_continues() {
        let mut scanner = scanner(ScriptedAdc::new(Vec::from([0, 4094])));
        let mut sink = SaturatingSink {
            accepted: Vec::new(),
            capacity: 1,
        };

        let stats = block_on(scanner.sweep(&mut sink)).unwrap();
        assert_eq!(stats.published, 1);
        assert_eq!(stats.dropped, 1);
        assert_eq!(sink.accepted.len(), 1);
    }

    struct ScriptedButtons {
        // One level sequence per poll cycle, all buttons at once.
        cycles: Vec<[bool; 2]>,
        next: usize,
    }

    impl DigitalSource for ScriptedButtons {
        fn is_low(&mut self, index: usize) -> bool {
            self.cycles[self.next][index]
        }
    }

    #[test]
    fn test_button_press_emits_exactly_once() {
        let mut buttons = ButtonScanner::<_, 2>::new(
            ScriptedButtons {
                cycles: Vec::from([
                    [false, false],
                    [true, false],
                    [true, false],
                    [true, false],
                ]),
                next: 0,
            },
            LAYOUT,
        );
        let mut sink = VecSink::default();

        for cycle in 0..4 {
            buttons.source.next = cycle;
            block_on(buttons.poll(&mut sink));
        }

        // Exactly one event for the high->low transition; holding emits
        // nothing further.
        assert_eq!(
            sink.events,
            [InputEvent {
                axis: LAYOUT.button_axis(0),
                value: 1,
            }]
        );
    }

    #[test]
    fn test_button_release_reports_zero() {
        let mut buttons = ButtonScanner::<_, 2>::new(
            ScriptedButtons {
                cycles: Vec::from([[true, true], [false, true]]),
                next: 0,
            },
            LAYOUT,
        );
        let mut sink = VecSink::default();

        buttons.source.next = 0;
        let stats = block_on(buttons.poll(&mut sink));
        assert_eq!(stats.published, 2);

        buttons.source.next = 1;
        block_on(buttons.poll(&mut sink));

        assert_eq!(
            sink.events,
            [
                InputEvent { axis: 2, value: 1 },
                InputEvent { axis: 3, value: 1 },
                InputEvent { axis: 2, value: 0 },
            ]
        );
    }
}
