// ==========================================
// 用户订单管理控制台 - 构造数据生成器
// ==========================================
// 职责: 生成形如真实数据的合成记录，用于在没有导入文件时
//       演练导入管道（生成结果必须通过与文件导入相同的校验）
// 随机源: 显式传入的 StdRng（种子可复现）
// ==========================================

use crate::domain::{OrderRecord, UserRecord};
use rand::rngs::StdRng;
use rand::Rng;

// 姓名池（ASCII，保证拼出的邮箱通过格式校验）
const FIRST_NAMES: &[&str] = &[
    "Ana", "Luis", "Carlos", "Elena", "Pedro", "Laura", "Diego", "Carmen", "Jorge", "Marta",
];
const LAST_NAMES: &[&str] = &[
    "Garcia", "Martinez", "Lopez", "Sanchez", "Perez", "Gomez", "Fernandez", "Diaz", "Romero",
    "Torres",
];
const EMAIL_DOMAINS: &[&str] = &["ejemplo.com", "correo.com", "mail.com"];

// 商品池（与导入模板同一风格）
const PRODUCT_NAMES: &[&str] = &[
    "Laptop",
    "Mouse",
    "Teclado",
    "Monitor",
    "Impresora",
    "Auriculares",
    "Webcam",
    "Tablet",
];

/// 订单构造数据找不到可用用户池时的兜底用户 ID 集合
pub const FALLBACK_USER_IDS: &[i64] = &[1, 2, 3];

// ==========================================
// FixtureContext - 生成上下文
// ==========================================
/// 订单记录引用的用户 ID 从调用方提供的池中抽取；
/// 池为空时退回固定兜底集合
#[derive(Debug, Clone, Default)]
pub struct FixtureContext {
    pub user_id_pool: Vec<i64>,
}

impl FixtureContext {
    pub fn with_user_ids(user_id_pool: Vec<i64>) -> Self {
        Self { user_id_pool }
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// 生成 count 条用户构造记录
///
/// 邮箱带序号后缀，保证批次内不重复（后端会拒绝重复邮箱）
pub fn generate_user_fixtures(count: usize, rng: &mut StdRng) -> Vec<UserRecord> {
    (0..count)
        .map(|i| {
            let first = pick(rng, FIRST_NAMES);
            let last = pick(rng, LAST_NAMES);
            let domain = pick(rng, EMAIL_DOMAINS);
            UserRecord {
                name: format!("{} {}", first, last),
                email: format!(
                    "{}.{}{}@{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    i,
                    domain
                ),
            }
        })
        .collect()
}

/// 生成 count 条订单构造记录
///
/// # 参数
/// - ctx: 提供 user_id 池；池为空时使用 FALLBACK_USER_IDS
pub fn generate_order_fixtures(
    count: usize,
    rng: &mut StdRng,
    ctx: &FixtureContext,
) -> Vec<OrderRecord> {
    let pool: &[i64] = if ctx.user_id_pool.is_empty() {
        FALLBACK_USER_IDS
    } else {
        &ctx.user_id_pool
    };

    (0..count)
        .map(|_| {
            // 金额取两位小数，范围 (0, 1000]
            let cents: i64 = rng.gen_range(1..=100_000);
            OrderRecord {
                user_id: pool[rng.gen_range(0..pool.len())],
                product_name: pick(rng, PRODUCT_NAMES).to_string(),
                amount: cents as f64 / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_user_fixtures_unique_emails() {
        let mut rng = StdRng::seed_from_u64(7);
        let users = generate_user_fixtures(50, &mut rng);
        assert_eq!(users.len(), 50);

        let mut emails: Vec<_> = users.iter().map(|u| u.email.clone()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), 50);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_user_fixtures(10, &mut a),
            generate_user_fixtures(10, &mut b)
        );
    }

    #[test]
    fn test_order_fixtures_use_caller_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let ctx = FixtureContext::with_user_ids(vec![77, 88]);
        let orders = generate_order_fixtures(30, &mut rng, &ctx);
        assert!(orders.iter().all(|o| o.user_id == 77 || o.user_id == 88));
        assert!(orders.iter().all(|o| o.amount > 0.0));
    }

    #[test]
    fn test_order_fixtures_fallback_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let orders = generate_order_fixtures(20, &mut rng, &FixtureContext::default());
        assert!(orders
            .iter()
            .all(|o| FALLBACK_USER_IDS.contains(&o.user_id)));
    }
}
