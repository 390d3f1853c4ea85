use crate::sensors::OrientationReading;

/// Scripted orientation stream: replays a fixed list of readings in order,
/// then reports exhaustion.
pub struct ScriptedOrientation {
    readings: Vec<OrientationReading>,
    position: usize,
}

impl ScriptedOrientation {
    pub fn new(readings: Vec<OrientationReading>) -> Self {
        Self {
            readings,
            position: 0,
        }
    }

    pub fn next_reading(&mut self) -> Option<OrientationReading> {
        let reading = self.readings.get(self.position).copied();
        self.position += 1;
        reading
    }
}

impl Iterator for ScriptedOrientation {
    type Item = OrientationReading;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_reading()
    }
}

/// Raw-rotation readings sweeping a full turn at the given step.
///
/// Exercises the polarity flip in normalization across the whole circle.
pub fn sweep_readings(step_degrees: f32) -> Vec<OrientationReading> {
    let mut readings = Vec::new();
    let mut angle = 0.0f32;
    while angle < 360.0 {
        readings.push(OrientationReading {
            compass_heading_degrees: None,
            raw_rotation_degrees: Some(angle),
        });
        angle += step_degrees;
    }
    readings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_covers_the_circle() {
        let readings = sweep_readings(45.0);
        assert_eq!(readings.len(), 8);
        assert_eq!(readings[0].raw_rotation_degrees, Some(0.0));
        assert_eq!(readings[7].raw_rotation_degrees, Some(315.0));
    }

    #[test]
    fn test_scripted_stream_replays_in_order() {
        let mut script = ScriptedOrientation::new(sweep_readings(90.0));
        assert_eq!(script.next_reading().unwrap().raw_rotation_degrees, Some(0.0));
        assert_eq!(script.next_reading().unwrap().raw_rotation_degrees, Some(90.0));
        assert_eq!(script.count(), 2);
    }
}
