// Host-side tests for the dashboard view model wired to a connection.

use fsr_core::{
    bind_handlers, slider_value, ConnectionManager, CoreError, CoreResult, Dashboard,
    DashboardConfig, Transport,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl Transport for Recorder {
    fn send_text(&mut self, text: &str) -> CoreResult<()> {
        self.0.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn close(&mut self) {}
}

fn config(capacity: usize) -> DashboardConfig {
    DashboardConfig {
        ring_buffer_capacity: capacity,
        ..DashboardConfig::default()
    }
}

#[test]
fn threshold_edit_round_trip_scenario() {
    let dashboard = Rc::new(RefCell::new(Dashboard::new(config(10)).unwrap()));
    let wire = Recorder::default();
    let mut conn = ConnectionManager::new();
    bind_handlers(&dashboard, &mut conn);
    let id = conn.connect(wire.clone());
    conn.handle_open(id);

    conn.handle_message(id, r#"["thresholds", {"thresholds": [10, 20, 30, 40]}]"#)
        .unwrap();
    let msg = dashboard.borrow_mut().edit_threshold(2, 99.0).unwrap();
    conn.emit(&msg).unwrap();

    let sent = wire.0.borrow();
    let v: serde_json::Value = serde_json::from_str(&sent[0]).unwrap();
    assert_eq!(v, serde_json::json!(["update_threshold", [10.0, 20.0, 99.0, 40.0], 2]));
}

#[test]
fn values_feed_history_and_latest() {
    let dashboard = Rc::new(RefCell::new(Dashboard::new(config(3)).unwrap()));
    let mut conn: ConnectionManager<Recorder> = ConnectionManager::new();
    bind_handlers(&dashboard, &mut conn);
    let id = conn.connect(Recorder::default());
    conn.handle_open(id);
    for i in 1..=4 {
        let frame = format!(r#"["values", {{"values": [{i}, 0, 0, 0]}}]"#);
        conn.handle_message(id, &frame).unwrap();
    }
    let d = dashboard.borrow();
    let firsts: Vec<f32> = d.channel_history(0).collect();
    assert_eq!(firsts, vec![2.0, 3.0, 4.0]);
    assert_eq!(d.selection().latest(), Some(&[4.0, 0.0, 0.0, 0.0][..]));
}

#[test]
fn overflowing_sample_is_rejected_and_smoothing_keeps_working() {
    let dashboard = Rc::new(RefCell::new(Dashboard::new(config(8)).unwrap()));
    let mut conn: ConnectionManager<Recorder> = ConnectionManager::new();
    bind_handlers(&dashboard, &mut conn);
    let id = conn.connect(Recorder::default());
    conn.handle_open(id);
    dashboard.borrow_mut().selection_mut().toggle("PadLeft").unwrap();

    conn.handle_message(id, r#"["values", {"values": [500, 0, 0, 0]}]"#)
        .unwrap();
    let r = conn.handle_message(id, r#"["values", {"values": [1e300, 2, 3, 4]}]"#);
    assert!(matches!(r, Err(CoreError::MalformedFrame(_))));
    {
        let d = dashboard.borrow();
        assert_eq!(d.selection().latest(), Some(&[500.0, 0.0, 0.0, 0.0][..]));
        assert_eq!(d.history().len(), 1);
    }

    for _ in 0..200 {
        conn.handle_message(id, r#"["values", {"values": [500, 0, 0, 0]}]"#)
            .unwrap();
    }
    let rows = dashboard.borrow().readout();
    let smoothed = rows[0].smoothed.unwrap();
    assert!((smoothed - 500.0).abs() < 1.0, "smoothed = {smoothed}");
}

#[test]
fn wrong_arity_values_are_rejected_everywhere() {
    let dashboard = Rc::new(RefCell::new(Dashboard::new(config(3)).unwrap()));
    let mut conn: ConnectionManager<Recorder> = ConnectionManager::new();
    bind_handlers(&dashboard, &mut conn);
    let id = conn.connect(Recorder::default());
    conn.handle_open(id);
    let r = conn.handle_message(id, r#"["values", {"values": [1, 2, 3]}]"#);
    assert!(matches!(
        r,
        Err(CoreError::ShapeMismatch {
            expected: 4,
            actual: 3
        })
    ));
    let d = dashboard.borrow();
    assert!(d.history().is_empty());
    assert!(d.selection().latest().is_none());
}

#[test]
fn readout_lists_selected_pads_in_order() {
    let mut d = Dashboard::new(config(5)).unwrap();
    d.on_thresholds(&[100.0, 200.0, 300.0, 400.0]).unwrap();
    d.on_values(&[150.0, 50.0, 300.0, 0.0]).unwrap();
    d.selection_mut().toggle("PadTop").unwrap();
    d.selection_mut().toggle("PadLeft").unwrap();

    let rows = d.readout();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "PadLeft");
    assert_eq!(rows[0].threshold, 100.0);
    assert_eq!(rows[0].force, Some(150.0));
    assert!(rows[0].triggered);
    assert!(rows[0].smoothed.is_some());
    assert_eq!(rows[1].name, "PadTop");
    assert_eq!(rows[1].index, 2);
    assert!(rows[1].triggered);
}

#[test]
fn readout_before_any_sample_has_no_force() {
    let mut d = Dashboard::new(config(5)).unwrap();
    d.selection_mut().toggle("PadRight").unwrap();
    let rows = d.readout();
    assert_eq!(rows[0].force, None);
    assert_eq!(rows[0].threshold, d.config().default_threshold);
    assert!(!rows[0].triggered);
}

#[test]
fn reset_tears_down_connection_state() {
    let mut d = Dashboard::new(config(5)).unwrap();
    d.on_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    d.selection_mut().toggle("PadTop").unwrap();
    d.set_panel_open(true);
    d.reset();
    assert!(d.history().is_empty());
    assert_eq!(d.selection().selected().count(), 0);
    assert!(!d.panel_open());
    assert!(d.readout().is_empty());
}

#[test]
fn on_connected_clears_history() {
    let mut d = Dashboard::new(config(5)).unwrap();
    d.on_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    d.on_connected();
    assert!(d.history().is_empty());
    assert_eq!(d.history().capacity(), 5);
}

#[test]
fn edit_out_of_range_fails() {
    let mut d = Dashboard::new(config(5)).unwrap();
    assert!(matches!(
        d.edit_threshold(9, 1.0),
        Err(CoreError::PadIndexOutOfRange { .. })
    ));
}

#[test]
fn slider_clamps_to_adc_range() {
    assert_eq!(slider_value(0.0), 1.0);
    assert_eq!(slider_value(512.0), 512.0);
    assert_eq!(slider_value(4000.0), 1023.0);
}
