use crate::structs::category_statistics::CategoryStatisticsMap;
use crate::structs::grouped_statistics::GroupedStatistics;

pub fn group_by_metric(per_category: CategoryStatisticsMap) -> GroupedStatistics {
    let mut grouped = GroupedStatistics::default();
    for (category_name, statistics) in per_category {
        grouped.insert(&category_name, statistics);
    }
    log::info!("🗂️ Grouped statistics per deliverable");
    grouped
}
