//! # AD82011 Driver
//!
//! This is a driver for the ESMT AD82011 Class-D audio amplifier.
//!
//! Specifically, this driver loads the amplifier's configuration registers
//! over I²C - it does not handle the digital audio interface (I²S, or
//! similar) that carries the samples.
//!
//! The AD82011 powers up with conservative defaults and has to be brought
//! into its operating state by writing a fixed sequence of single-byte
//! registers. The sequence starts with the State Control registers (power
//! state, channel enablement, protection behaviour) and only then sets the
//! tuning parameters (volume, DRC thresholds, noise gate levels), so the
//! order of the writes is significant and must not be re-arranged.
//!
//! The AD82011 registers are write-only as far as this driver is concerned:
//! there is no readback or verification step. If any transfer fails the
//! remaining sequence is abandoned, because an amplifier left half-configured
//! may produce output at an unintended volume or power setting - the caller
//! gets the address of the failing register and decides what to do.
//!
//! # Example
//!
//! You might bring the amplifier up like this:
//!
//! ```rust
//! # use embedded_hal::blocking::i2c::Write;
//! # struct I2c;
//! # impl embedded_hal::blocking::i2c::Write for I2c {
//! #     type Error = ();
//! #     fn write(&mut self, address: embedded_hal::blocking::i2c::SevenBitAddress, bytes: &[u8]) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let mut i2c = I2c;
//! let amp = ad82011::Ad82011::new();
//! if let Err(e) = amp.initialize(&mut i2c) {
//!     // Amplifier didn't respond. The sequence stopped at register
//!     // `e.register` and nothing after it was written.
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_docs)]

//
// Public Types
//

/// The set of registers in the AD82011 that the power-on sequence touches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Register {
    /// State Control 1
    StateControl1 = 0x00,
    /// State Control 2
    StateControl2 = 0x01,
    /// State Control 3
    StateControl3 = 0x02,
    /// Master volume
    MasterVolumeControl = 0x03,
    /// Channel 1 volume
    Channel1VolumeControl = 0x04,
    /// Channel 2 volume
    Channel2VolumeControl = 0x05,
    /// Under-voltage threshold for the high-voltage supply
    UnderVoltageSelection = 0x06,
    /// State Control 4
    StateControl4 = 0x07,
    /// DRC limiter attack/release rate
    DrcLimiterRate = 0x08,
    /// Undocumented, written by the vendor start-up sequence
    Reserved09 = 0x09,
    /// Undocumented, written by the vendor start-up sequence
    Reserved0C = 0x0c,
    /// Undocumented, written by the vendor start-up sequence
    Reserved0D = 0x0d,
    /// Undocumented, written by the vendor start-up sequence
    Reserved0E = 0x0e,
    /// Undocumented, written by the vendor start-up sequence
    Reserved0F = 0x0f,
    /// Attack threshold, top 5 bits
    AttackThresholdHigh = 0x10,
    /// Attack threshold, middle 8 bits
    AttackThresholdMid = 0x11,
    /// Attack threshold, bottom 8 bits
    AttackThresholdLow = 0x12,
    /// Power clipping, top 8 bits
    PowerClippingHigh = 0x13,
    /// Power clipping, middle 8 bits
    PowerClippingMid = 0x14,
    /// Power clipping, bottom 8 bits
    PowerClippingLow = 0x15,
    /// State Control 5
    StateControl5 = 0x16,
    /// Volume fine tune
    VolumeFineTune = 0x17,
    /// Dynamic temperature control
    DynamicTemperatureControl = 0x18,
    /// Noise gate attack level, top 8 bits
    NoiseGateAttackHigh = 0x1a,
    /// Noise gate attack level, middle 8 bits
    NoiseGateAttackMid = 0x1b,
    /// Noise gate attack level, bottom 8 bits
    NoiseGateAttackLow = 0x1c,
    /// Noise gate release level, top 8 bits
    NoiseGateReleaseHigh = 0x1d,
    /// Noise gate release level, middle 8 bits
    NoiseGateReleaseMid = 0x1e,
    /// Noise gate release level, bottom 8 bits
    NoiseGateReleaseLow = 0x1f,
    /// DRC energy coefficient, top 8 bits
    DrcEnergyCoefficientHigh = 0x20,
    /// DRC energy coefficient, bottom 8 bits
    DrcEnergyCoefficientLow = 0x21,
    /// DRC release threshold, top 8 bits
    DrcReleaseThresholdHigh = 0x22,
    /// DRC release threshold, middle 8 bits
    DrcReleaseThresholdMid = 0x23,
    /// DRC release threshold, bottom 8 bits
    DrcReleaseThresholdLow = 0x24,
    /// Device number
    DeviceNumber = 0x25,
    /// Undocumented, written by the vendor start-up sequence
    Reserved2E = 0x2e,
    /// Undocumented, written by the vendor start-up sequence
    Reserved2F = 0x2f,
}

/// A register transfer that the amplifier did not complete.
///
/// Carries the address of the register whose write failed and the underlying
/// bus error. Registers earlier in the sequence were written; registers after
/// the failing one were not attempted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Error<E> {
    /// Address of the register whose transfer failed
    pub register: u8,
    /// The error the bus reported
    pub cause: E,
}

/// Represents one AD82011 amplifier on the bus.
///
/// The chip has a single fixed bus address, so this object only exists to
/// hang the transfer methods off. It holds no bus handle - every method
/// borrows the bus for the duration of the call, so the bus is free again on
/// every exit path, success or failure.
#[derive(Debug, Copy, Clone)]
pub struct Ad82011 {
    bus_address: u8,
}

//
// Public Data
//

/// The AD82011's fixed 7-bit I²C address.
pub const DEVICE_ADDRESS: u8 = 0x34;

/// The vendor power-on register sequence.
///
/// Pure data; feed it to [`Ad82011::load_table`] (which is exactly what
/// [`Ad82011::initialize`] does). The State Control writes come first to
/// establish a safe operating state before any tuning parameter is set, so
/// the order here is part of the contract.
pub const POWER_ON_CONFIG: &[(Register, u8)] = &[
    (Register::StateControl1, 0x00),
    (Register::StateControl2, 0x81),
    (Register::StateControl3, 0x50),
    (Register::MasterVolumeControl, 0x4e),
    (Register::Channel1VolumeControl, 0x18),
    (Register::Channel2VolumeControl, 0x18),
    (Register::UnderVoltageSelection, 0xa2),
    (Register::StateControl4, 0xfe),
    (Register::DrcLimiterRate, 0x6a),
    (Register::Reserved09, 0x60),
    (Register::Reserved0C, 0x32),
    (Register::Reserved0D, 0x00),
    (Register::Reserved0E, 0x00),
    (Register::Reserved0F, 0x00),
    (Register::AttackThresholdHigh, 0x20),
    (Register::AttackThresholdMid, 0x00),
    (Register::AttackThresholdLow, 0x00),
    (Register::PowerClippingHigh, 0x20),
    (Register::PowerClippingMid, 0x00),
    (Register::PowerClippingLow, 0x00),
    (Register::StateControl5, 0x00),
    (Register::VolumeFineTune, 0x00),
    (Register::DynamicTemperatureControl, 0x40),
    (Register::NoiseGateAttackHigh, 0x00),
    (Register::NoiseGateAttackMid, 0x00),
    (Register::NoiseGateAttackLow, 0x1a),
    (Register::NoiseGateReleaseHigh, 0x00),
    (Register::NoiseGateReleaseMid, 0x00),
    (Register::NoiseGateReleaseLow, 0x53),
    (Register::DrcEnergyCoefficientHigh, 0x00),
    (Register::DrcEnergyCoefficientLow, 0x10),
    (Register::DrcReleaseThresholdHigh, 0x08),
    (Register::DrcReleaseThresholdMid, 0x00),
    (Register::DrcReleaseThresholdLow, 0x00),
    (Register::DeviceNumber, 0x34),
    (Register::Reserved2E, 0x30),
    (Register::Reserved2F, 0x06),
];

//
// impls on Public Types
//

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register as u8
    }
}

impl Ad82011 {
    /// Create a new AD82011 amplifier proxy object.
    ///
    /// The chip lives at the fixed address [`DEVICE_ADDRESS`]; there is no
    /// address-select pin and no multi-device support.
    pub const fn new() -> Ad82011 {
        Ad82011 {
            bus_address: DEVICE_ADDRESS,
        }
    }

    /// Write a single byte to one amplifier register, over I²C.
    ///
    /// The transaction is a two-byte write of register address then value,
    /// and it blocks until the bus reports completion or failure.
    pub fn write_register<B>(
        &self,
        bus: &mut B,
        register: Register,
        value: u8,
    ) -> Result<(), Error<B::Error>>
    where
        B: embedded_hal::blocking::i2c::Write,
    {
        let buffer = [register as u8, value];
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Setting AD82011 0x{:02x} to 0x{:02x}",
            register as u8,
            value
        );
        bus.write(self.bus_address, &buffer).map_err(|cause| Error {
            register: register as u8,
            cause,
        })
    }

    /// Transfer a table of register values to the amplifier, in table order.
    ///
    /// Writes are strictly sequential: entry N+1 is not attempted until entry
    /// N's transfer has completed. The first failed transfer aborts the rest
    /// of the table and is returned with the failing register's address.
    pub fn load_table<B>(
        &self,
        bus: &mut B,
        table: &[(Register, u8)],
    ) -> Result<(), Error<B::Error>>
    where
        B: embedded_hal::blocking::i2c::Write,
    {
        for &(register, value) in table {
            self.write_register(bus, register, value)?;
        }
        Ok(())
    }

    /// Load the vendor power-on sequence into the amplifier.
    ///
    /// Call this once at start-up, before routing any audio to the chip.
    pub fn initialize<B>(&self, bus: &mut B) -> Result<(), Error<B::Error>>
    where
        B: embedded_hal::blocking::i2c::Write,
    {
        self.load_table(bus, POWER_ON_CONFIG)
    }
}

impl Default for Ad82011 {
    fn default() -> Ad82011 {
        Ad82011::new()
    }
}

//
// Private Types
//

// None

//
// End of file
//
