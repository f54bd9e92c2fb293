// cs-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, ElectricalResistance as UomElectricalResistance,
    Length as UomLength, Power as UomPower,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Current = UomElectricCurrent;
pub type Voltage = UomElectricPotential;
pub type Resistance = UomElectricalResistance;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn ohms(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

/// Conductor cross-sections are quoted in mm² everywhere in the cable trade.
#[inline]
pub fn mm2(v: f64) -> Area {
    use uom::si::area::square_millimeter;
    Area::new::<square_millimeter>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Readers for the practical units the cable formulas are written in.
pub mod read {
    use super::*;

    #[inline]
    pub fn a(v: Current) -> f64 {
        v.get::<uom::si::electric_current::ampere>()
    }

    #[inline]
    pub fn v(v: Voltage) -> f64 {
        v.get::<uom::si::electric_potential::volt>()
    }

    #[inline]
    pub fn ohm(v: Resistance) -> f64 {
        v.get::<uom::si::electrical_resistance::ohm>()
    }

    #[inline]
    pub fn w(v: Power) -> f64 {
        v.get::<uom::si::power::watt>()
    }

    #[inline]
    pub fn m(v: Length) -> f64 {
        v.get::<uom::si::length::meter>()
    }

    #[inline]
    pub fn mm2(v: Area) -> f64 {
        v.get::<uom::si::area::square_millimeter>()
    }

    #[inline]
    pub fn celsius(v: Temperature) -> f64 {
        v.get::<uom::si::thermodynamic_temperature::degree_celsius>()
    }
}
