//! Fixed-step simulation loop.
//!
//! Per step i: derive the output for step i−1 from the command issued two
//! steps earlier, run the controller on that output, integrate the
//! dynamics over one step with the fresh command, then fold the rotor
//! angle back into `[0, 2π)`. The physics of step i strictly depends on
//! step i−1, so the loop is inherently sequential.

use spinsim_control::HBridge;
use spinsim_motor::{
    AngleBoundError, DebugTrace, MotorOutput, MotorParams, MotorState, Perturbation,
    SwitchCommand,
};
use tracing::info;

use crate::config::SimConfig;
use crate::rk4::rk4_step;

/// Recorded time series of one run, one row per step.
#[derive(Debug, Clone, Default)]
pub struct SimTrace {
    pub time: Vec<f64>,
    pub states: Vec<MotorState>,
    pub commands: Vec<SwitchCommand>,
    pub outputs: Vec<MotorOutput>,
    pub debug: Vec<DebugTrace>,
}

/// Run a simulation as described by the configuration.
pub fn run(config: &SimConfig) -> Result<SimTrace, AngleBoundError> {
    let bridge = HBridge::new(config.motor.n_poles, config.pwm, config.policy);
    let perturbation = Perturbation {
        load_torque: config.run.load_torque,
        static_friction: config.run.static_friction,
    };
    let initial = MotorState {
        theta: config.run.initial_theta,
        omega: config.run.initial_omega,
        ..Default::default()
    };
    let dt = 1.0 / config.run.frequency;
    let steps = (config.run.duration * config.run.frequency).round() as usize;

    simulate(&config.motor, &bridge, &perturbation, initial, dt, steps)
}

/// Step the coupled motor/controller model `steps` times from `initial`.
pub fn simulate(
    params: &MotorParams,
    bridge: &HBridge,
    perturbation: &Perturbation,
    initial: MotorState,
    dt: f64,
    steps: usize,
) -> Result<SimTrace, AngleBoundError> {
    let mut trace = SimTrace {
        time: (0..steps).map(|i| i as f64 * dt).collect(),
        states: vec![MotorState::default(); steps],
        commands: vec![SwitchCommand::default(); steps],
        outputs: vec![MotorOutput::default(); steps],
        debug: vec![DebugTrace::default(); steps],
    };
    if steps == 0 {
        return Ok(trace);
    }
    trace.states[0] = initial;

    let mut last_percent = 0_usize;
    for i in 1..steps {
        // The sensed output for step i−1 reflects the command from two
        // steps earlier — one step of controller lag on top of one step
        // of sensing lag.
        let lagged = if i >= 2 {
            trace.commands[i - 2]
        } else {
            SwitchCommand::default()
        };
        trace.outputs[i - 1] = params.output(&trace.states[i - 1], &lagged)?;
        trace.commands[i - 1] = bridge.run(&trace.outputs[i - 1], trace.time[i - 1]);

        let command = trace.commands[i - 1];
        let x = trace.states[i - 1].to_vector();
        let next = rk4_step(
            |x, t| {
                params
                    .derivative(&MotorState::from_vector(x), t, &command, perturbation)
                    .map(|d| d.to_vector())
            },
            &x,
            trace.time[i - 1],
            dt,
        )?;
        let mut state = MotorState::from_vector(&next);
        state.normalize_theta();
        trace.states[i] = state;

        // Instrumentation row for this step, evaluated on the pre-step
        // state and command.
        let (_, debug) =
            params.derivative_debug(&trace.states[i - 1], trace.time[i - 1], &command, perturbation)?;
        trace.debug[i] = debug;

        let percent = i * 100 / (steps - 1).max(1);
        if percent >= last_percent + 10 {
            info!(percent, "simulation progress");
            last_percent = percent;
        }
    }

    // The final row never gets its own controller invocation; carry the
    // previous one forward so the series stay aligned.
    if steps >= 2 {
        trace.outputs[steps - 1] = trace.outputs[steps - 2];
        trace.commands[steps - 1] = trace.commands[steps - 2];
    }

    Ok(trace)
}
