//! Shared inputs for command tests.

pub(crate) const METER_LOG: &str = "2020-01-01\t1000\t10.0\n2020-02-01\t1100\t12.0\n";

pub(crate) const STATION_DATA: &str = "Heathrow (London Airport)
Location 507800E 176700N, Lat 51.479 Lon -0.449, 25 metres amsl
Estimated data is marked with a * after the value.
Missing data (more than 2 days missing in month) is marked by  ---.
Sunshine data taken from an automatic Kipp & Zonen sensor marked with a #, otherwise sunshine data taken from a Campbell Stokes recorder.
   yyyy  mm   tmax    tmin      af    rain     sun
              degC    degC    days      mm   hours
   2019  12    9.6     3.0       4    71.4    42.1#
   2020   1    9.8     4.2       2    41.0    60.3#
   2020   2   11.1     4.7       0    78.6    75.4#
";
