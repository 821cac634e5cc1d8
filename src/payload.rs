use crate::{Direction, ParsedPair};

/// Reassembles a transcoded pair into the single-line payload expected by the verifier.
///
/// - Forward: `{condition} statement;`
/// - Backward: `statement; {condition}`
pub fn render_payload(pair: &ParsedPair, direction: Direction) -> String {
    match direction {
        Direction::Forward => format!("{{{}}} {};", pair.condition, pair.statement),
        Direction::Backward => format!("{}; {{{}}}", pair.statement, pair.condition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{transcode_backward, transcode_forward};

    #[test]
    fn forward_payload() {
        let pair = transcode_forward("{x>0 && y>0} y = 2;").unwrap();
        assert_eq!(
            render_payload(&pair, Direction::Forward),
            "{(x>0) & (y>0)} y = 2;"
        );
    }

    #[test]
    fn backward_payload() {
        let pair = transcode_backward("x = x + 1; {x == 2}").unwrap();
        assert_eq!(
            render_payload(&pair, Direction::Backward),
            "x = x + 1; {(x == 2)}"
        );
    }

    #[test]
    fn payload_can_be_transcoded_again() {
        let pair = transcode_forward("{a || b} x = 1;").unwrap();
        let again = transcode_forward(&render_payload(&pair, Direction::Forward)).unwrap();
        assert_eq!(again.statement, pair.statement);
        assert_eq!(again.condition, "((a)) | ((b))");
    }
}
