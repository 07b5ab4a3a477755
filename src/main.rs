#![no_main]
#![no_std]

use debouncr::Debouncer;
use embedded_hal::digital::v2::*;
use kenwood_xs::{lookup, Command, LineBuffer};
use rtic::app;
use rtic::cyccnt::U32Ext;
use rtt_target::rprintln;
use stm32f1xx_hal::{gpio::*, pac, prelude::*, rcc::Clocks};

// Frequency of the system clock, which will also be the frequency of CYCCNT.
const SYSCLK_HZ: u32 = 72_000_000;

// Periods are measured in system clock cycles; smaller is more frequent.
const BUTTON_POLL_PERIOD: u32 = SYSCLK_HZ / 100;
const RTT_POLL_PERIOD: u32 = SYSCLK_HZ / 5;

// Bytes drained from the RTT down channel per poll.
const RTT_READ_LEN: usize = 16;

#[app(device = stm32f1xx_hal::pac, peripherals = true, monotonic = rtic::cyccnt::CYCCNT)]
const APP: () = {
    struct Resources {
        #[init(0)]
        cursor: usize, // Index into the command listing.
        #[init(LineBuffer::new())]
        line: LineBuffer, // Partial command name typed on the host.
        led: gpioc::PC13<Output<PushPull>>,
        button: gpioa::PA10<Input<PullUp>>,
        button_state: Debouncer<u8, debouncr::Repeat6>,
        // Used to read command names from host over RTT.
        rtt_down: rtt_target::DownChannel,
    }

    #[init(spawn = [poll_button, read_input])]
    fn init(ctx: init::Context) -> init::LateResources {
        // Initialize RTT communication with host.
        let rtt_channels = rtt_target::rtt_init_default!();
        rtt_target::set_print_channel(rtt_channels.up.0);

        rprintln!("RTIC init started");
        let mut cp = ctx.core;
        let dp = ctx.device;

        // Enable CYCCNT; used for scheduling.
        cp.DWT.enable_cycle_counter();

        // Setup and apply clock configuration.
        let mut flash = dp.FLASH.constrain();
        let mut rcc = dp.RCC.constrain();
        let clocks: Clocks = rcc
            .cfgr
            .use_hse(8.mhz())
            .sysclk(SYSCLK_HZ.hz())
            .pclk1((SYSCLK_HZ / 2).hz())
            .freeze(&mut flash.acr);
        rprintln!(" SYSCLK: {:?} MHz", clocks.sysclk().0 / 1_000_000);

        let mut gpioa = dp.GPIOA.split(&mut rcc.apb2);
        let mut gpioc = dp.GPIOC.split(&mut rcc.apb2);

        // Configure pc13 as output via CR high register.
        let mut led = gpioc.pc13.into_push_pull_output(&mut gpioc.crh);
        led.set_high().unwrap(); // LED off

        // Setup pa10 button.
        let button = gpioa.pa10.into_pull_up_input(&mut gpioa.crh);

        // Start scheduled tasks.
        ctx.spawn.poll_button().unwrap();
        ctx.spawn.read_input().unwrap();

        // Prevent wait-for-interrupt (default rtic idle) from stalling debug features.
        //
        // See: https://github.com/probe-rs/probe-rs/issues/350
        dp.DBGMCU.cr.modify(|_, w| {
            w.dbg_sleep().set_bit();
            w.dbg_standby().set_bit();
            w.dbg_stop().set_bit()
        });

        rprintln!("RTIC init completed");
        rprintln!("{} XS commands known", Command::ALL.len());
        rprintln!("Press the button to list them, or enter a command name:");

        init::LateResources {
            led,
            button,
            button_state: debouncr::debounce_6(false),
            rtt_down: rtt_channels.down.0,
        }
    }

    #[task(
        priority = 2,
        resources = [button, button_state],
        spawn = [button_press],
        schedule = [poll_button]
    )]
    fn poll_button(ctx: poll_button::Context) {
        // Button is active low.
        let pressed = ctx.resources.button.is_low().unwrap();
        let edge = ctx.resources.button_state.update(pressed);
        if edge == Some(debouncr::Edge::Rising) {
            ctx.spawn.button_press().unwrap();
        }

        // Schedule next button poll.
        ctx.schedule
            .poll_button(ctx.scheduled + BUTTON_POLL_PERIOD.cycles())
            .unwrap();
    }

    #[task(priority = 2, resources = [cursor])]
    fn button_press(ctx: button_press::Context) {
        let cursor = ctx.resources.cursor;

        if let Some(cmd) = Command::ALL.get(*cursor) {
            rprintln!("[{:2}] {} = {} (0x{:02x})", *cursor, cmd, cmd.code(), cmd.code());
        }
        *cursor = (*cursor + 1) % Command::ALL.len();
    }

    #[task(resources = [rtt_down, line, led], schedule = [read_input])]
    fn read_input(ctx: read_input::Context) {
        let read_input::Resources {
            rtt_down,
            line,
            led,
        } = ctx.resources;

        let mut buf = [0u8; RTT_READ_LEN];
        loop {
            let count = rtt_down.read(&mut buf);
            if count == 0 {
                break;
            }
            for &b in buf[..count].iter() {
                match line.push(b) {
                    Some(Ok(name)) => match lookup(name) {
                        Ok(code) => {
                            rprintln!("{} = {} (0x{:02x})", name, code, code);
                            led.toggle().unwrap();
                        }
                        Err(e) => rprintln!("{}: '{}'", e, name),
                    },
                    Some(Err(e)) => rprintln!("{}", e),
                    None => {}
                }
            }
        }

        ctx.schedule
            .read_input(ctx.scheduled + RTT_POLL_PERIOD.cycles())
            .unwrap();
    }

    // Unused interrupts for task scheduling.
    extern "C" {
        fn SPI1();
        fn SPI2();
    }
};

#[inline(never)]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    rprintln!("{}", info);
    loop {}
}
