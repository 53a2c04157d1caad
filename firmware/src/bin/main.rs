#![no_std]
#![no_main]

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_sync::channel::Channel;
use embassy_time::{Delay, Timer};
use static_cell::StaticCell;

use joy_to_uart::config::{
    ANALOG_CHANNELS, ANALOG_SWEEP_PERIOD_MS, AXES, BUTTONS, BUTTON_POLL_PERIOD_MS, CALIB,
    FILTER_WINDOW, MUX_SETTLE_US, UART_BAUD,
};
use joy_to_uart::{
    queue, AnalogScanner, ButtonInputs, ButtonScanner, ChannelSelector, EventQueue, EventReceiver,
    EventSender, FrameWriter, MuxAddressPins, MuxedAdc, QueueSink,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => embassy_rp::adc::InterruptHandler;
    UART0_IRQ => embassy_rp::uart::InterruptHandler<UART0>;
});

/// The inter-task event queue.
/// A Channel rather than a Signal: every discrete transition must reach the
/// wire in FIFO order, so "latest value wins" coalescing would lose button
/// edges.
static EVENT_QUEUE: StaticCell<EventQueue> = StaticCell::new();

type JoystickScanner =
    AnalogScanner<MuxAddressPins, Delay, MuxedAdc, FILTER_WINDOW, ANALOG_CHANNELS>;
type PanelScanner = ButtonScanner<ButtonInputs<BUTTONS>, BUTTONS>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("joy-to-uart starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let queue: &'static EventQueue = EVENT_QUEUE.init(Channel::new());

    // --- Multiplexer + ADC ---
    let mux = MuxAddressPins::new(
        [
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
        ],
        // Inhibit high: output gated off until the first route
        Output::new(p.PIN_5, Level::High),
    );
    let selector = ChannelSelector::new(mux, Delay, MUX_SETTLE_US);
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let adc_pin = AdcChannel::new_pin(p.PIN_26, Pull::None);
    let scanner = JoystickScanner::new(selector, MuxedAdc::new(adc, adc_pin), CALIB, AXES);

    // --- Buttons ---
    let buttons = ButtonInputs::new([
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
    ]);
    let panel = PanelScanner::new(buttons, AXES);

    // --- UART ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = UART_BAUD;
    let uart = Uart::new(
        p.UART0,
        p.PIN_0, // TX
        p.PIN_1, // RX (unused, the link is one-way)
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (tx, _rx) = uart.split();
    let writer = FrameWriter::new(tx);

    // On-board LED as TX activity indicator
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(analog_task(scanner, queue.sender())).unwrap();
    spawner.spawn(button_task(panel, queue.sender())).unwrap();
    spawner
        .spawn(transmit_task(writer, queue.receiver(), led))
        .unwrap();

    info!("tasks running, streaming input events");
}

/// Analog acquisition - one full multiplexed sweep per cycle.
#[embassy_executor::task]
async fn analog_task(mut scanner: JoystickScanner, sender: EventSender) {
    let mut sink = QueueSink::new(sender);
    loop {
        match scanner.sweep(&mut sink).await {
            Ok(stats) if stats.dropped > 0 => {
                warn!(
                    "queue full: dropped {} events this sweep ({} since boot)",
                    stats.dropped,
                    queue::dropped_events()
                );
            }
            Ok(_) => {}
            Err(e) => error!("analog sweep failed: {:?}", e),
        }
        Timer::after_millis(ANALOG_SWEEP_PERIOD_MS).await;
    }
}

/// Button acquisition - polls every pin and publishes edge transitions.
#[embassy_executor::task]
async fn button_task(mut panel: PanelScanner, sender: EventSender) {
    let mut sink = QueueSink::new(sender);
    loop {
        let stats = panel.poll(&mut sink).await;
        if stats.dropped > 0 {
            warn!(
                "queue full: dropped {} button events ({} since boot)",
                stats.dropped,
                queue::dropped_events()
            );
        }
        Timer::after_millis(BUTTON_POLL_PERIOD_MS).await;
    }
}

/// Serializer - sole queue consumer, frames events onto the UART.
///
/// This is the one task allowed to wait forever: stalling here only delays
/// transmission, never corrupts acquisition state.
#[embassy_executor::task]
async fn transmit_task(mut writer: FrameWriter, receiver: EventReceiver, mut led: Output<'static>) {
    loop {
        let event = receiver.receive().await;
        if let Err(e) = writer.send(&event).await {
            // A dead link makes the device useless; reset and start clean
            // (filters re-center, buttons read released).
            error!("uart write failed: {:?}", e);
            defmt::panic!("serial transport failure");
        }
        led.toggle();
    }
}
