use crate::reminder_record::SendDeadlineRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::{interval, sleep_until, Instant};
use renewal_reminder_infra::Context;
use std::time::Duration;

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Millis from `now_ts` until the next UTC midnight, the moment the daily
/// deadline reminder sweep runs.
pub fn get_start_delay(now_ts: i64) -> i64 {
    MILLIS_PER_DAY - now_ts.rem_euclid(MILLIS_PER_DAY)
}

pub fn start_deadline_reminder_job(ctx: Context) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let millis_to_next_run = get_start_delay(now);
        let start = Instant::now() + Duration::from_millis(millis_to_next_run as u64);

        sleep_until(start).await;
        let mut daily_interval = interval(Duration::from_millis(MILLIS_PER_DAY as u64));
        loop {
            daily_interval.tick().await;

            let usecase = SendDeadlineRemindersUseCase {};
            let _ = execute(usecase, &ctx).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(0), MILLIS_PER_DAY);
        assert_eq!(get_start_delay(1), MILLIS_PER_DAY - 1);
        assert_eq!(get_start_delay(MILLIS_PER_DAY - 1), 1);
        assert_eq!(get_start_delay(MILLIS_PER_DAY), MILLIS_PER_DAY);
        // 2021-02-21 10:30:00 UTC
        let mid_morning = 1613903400000;
        assert_eq!(get_start_delay(mid_morning), 1000 * 60 * 60 * 13 + 1000 * 60 * 30);
        // The delay always lands on a day boundary
        assert_eq!((mid_morning + get_start_delay(mid_morning)) % MILLIS_PER_DAY, 0);
    }
}
