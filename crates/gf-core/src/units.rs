// gf-core/src/units.rs

use uom::si::f64::{
    MassRate as UomMassRate, Power as UomPower, Pressure as UomPressure, Ratio as UomRatio,
    TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;

/// Pressure in bar.
///
/// Plant pressures are quoted in bar; whether a value is gauge or absolute is
/// a property of the measurement point, not of the type.
#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Temperature difference in kelvin.
#[inline]
pub fn delta_k(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn mw(v: f64) -> Power {
    use uom::si::power::megawatt;
    Power::new::<megawatt>(v)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    p.get::<uom::si::pressure::bar>()
}

#[inline]
pub fn to_degc(t: Temperature) -> f64 {
    t.get::<uom::si::thermodynamic_temperature::degree_celsius>()
}

#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    t.get::<uom::si::thermodynamic_temperature::kelvin>()
}

#[inline]
pub fn to_delta_k(dt: TempInterval) -> f64 {
    dt.get::<uom::si::temperature_interval::kelvin>()
}

#[inline]
pub fn to_kgps(m: MassRate) -> f64 {
    m.get::<uom::si::mass_rate::kilogram_per_second>()
}

#[inline]
pub fn to_mw(p: Power) -> f64 {
    p.get::<uom::si::power::megawatt>()
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales.
    pub const ZERO_CELSIUS_K: f64 = 273.15;

    /// Specific heat of liquid water [kJ/(kg·K)] used by the plant energy balances.
    pub const CP_WATER_KJ_PER_KG_K: f64 = 4.2;
}
